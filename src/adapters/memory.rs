//! In-process VideoRepository.
//!
//! Same contract as the PostgreSQL adapter without a database. The title
//! index and the records share one lock, so the uniqueness check and the
//! insert are a single atomic step.

use crate::domain::{NewVideo, StorageError, StorageResult, Video, VideoId};
use crate::ports::repository::VideoRepository;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

const OP_CREATE: &str = "storage.memory.create";
const OP_GET: &str = "storage.memory.get";

#[derive(Default)]
struct State {
    videos: HashMap<VideoId, Video>,
    titles: HashSet<String>,
    closed: bool,
}

#[derive(Clone, Default)]
pub struct InMemoryVideoRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryVideoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn create(&self, video: &NewVideo) -> StorageResult<VideoId> {
        let mut state = self.state.write().await;
        if state.closed {
            return Err(StorageError::Closed { op: OP_CREATE });
        }
        // Same range as the BIGINT column of the PostgreSQL store
        i64::try_from(video.size).map_err(|e| StorageError::unknown(OP_CREATE, e))?;
        if !state.titles.insert(video.title.clone()) {
            return Err(StorageError::TitleExists { op: OP_CREATE });
        }

        let id = VideoId::new(Uuid::new_v4().to_string());
        state.videos.insert(id.clone(), Video::from_new(id.clone(), video));
        Ok(id)
    }

    async fn get(&self, id: &VideoId) -> StorageResult<Video> {
        let state = self.state.read().await;
        if state.closed {
            return Err(StorageError::Closed { op: OP_GET });
        }
        state
            .videos
            .get(id)
            .cloned()
            .ok_or(StorageError::IdNotFound { op: OP_GET })
    }

    async fn close(&self) -> StorageResult<()> {
        let mut state = self.state.write().await;
        state.closed = true;
        state.videos.clear();
        state.titles.clear();
        Ok(())
    }
}
