use crate::domain::{NewVideo, StorageResult, Video, VideoId};
use async_trait::async_trait;

/// Durable store of video metadata records.
///
/// Implementations are shared by concurrent request handlers, so every
/// method takes `&self`. Title uniqueness is decided by the backend at
/// insert time; callers must not check for an existing title first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Insert a new record and return the id the store assigned to it.
    ///
    /// Fails with `TitleExists` when the title is already taken.
    async fn create(&self, video: &NewVideo) -> StorageResult<VideoId>;

    /// Fetch a record by id.
    ///
    /// Fails with `IdNotFound` when no record matches.
    async fn get(&self, id: &VideoId) -> StorageResult<Video>;

    /// Release the backend connection.
    /// Any call made after this fails with `Closed`.
    async fn close(&self) -> StorageResult<()>;
}
