use crate::domain::StorageResult;
use crate::ports::repository::VideoRepository;
use std::future::Future;
use std::sync::Arc;
use tracing::info;

/// Owns the video store for the lifetime of the process.
///
/// Request handlers get shared handles through `repository()`; the store is
/// closed once, after the shutdown future resolves.
pub struct StoreService<R> {
    repo: Arc<R>,
}

impl<R> StoreService<R>
where
    R: VideoRepository + 'static,
{
    pub fn new(repo: R) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }

    pub fn repository(&self) -> Arc<R> {
        self.repo.clone()
    }

    pub async fn run_until<F>(&self, shutdown: F) -> StorageResult<()>
    where
        F: Future<Output = ()>,
    {
        shutdown.await;
        info!("Shutdown requested, closing video store");
        self.repo.close().await
    }
}
