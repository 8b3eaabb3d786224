//! PostgreSQL VideoRepository implementation.

use super::error::translate;
use super::pool::PostgresVideoRepository;
use super::{OP_CREATE, OP_GET};
use crate::domain::{NewVideo, StorageError, StorageResult, Video, VideoId, VideoStatus};
use crate::ports::repository::VideoRepository;
use async_trait::async_trait;
use sqlx::FromRow;
use uuid::Uuid;

const INSERT_VIDEO: &str = r#"
    INSERT INTO videos (title, video_size, video_status)
    VALUES ($1, $2, $3)
    RETURNING id
"#;

const SELECT_VIDEO: &str = r#"
    SELECT id, title, video_size, video_status
    FROM videos
    WHERE id = $1
"#;

#[derive(FromRow)]
struct VideoRow {
    id: Uuid,
    title: String,
    video_size: i64,
    video_status: String,
}

impl VideoRow {
    fn into_video(self, op: &'static str) -> StorageResult<Video> {
        let size = u64::try_from(self.video_size).map_err(|e| StorageError::unknown(op, e))?;
        Ok(Video {
            id: VideoId::new(self.id.to_string()),
            title: self.title,
            size,
            status: VideoStatus::from(self.video_status),
        })
    }
}

/// Ids handed out by `create` are lowercase hyphenated UUIDs. Any other
/// spelling, even of the same UUID, is not an id this store returned.
fn parse_key(id: &VideoId) -> Option<Uuid> {
    let key = Uuid::try_parse(id.as_str()).ok()?;
    (key.hyphenated().to_string() == id.as_str()).then_some(key)
}

#[async_trait]
impl VideoRepository for PostgresVideoRepository {
    async fn create(&self, video: &NewVideo) -> StorageResult<VideoId> {
        self.ensure_open(OP_CREATE)?;
        let size = i64::try_from(video.size).map_err(|e| StorageError::unknown(OP_CREATE, e))?;

        // Duplicate titles are rejected by the unique constraint, not pre-checked.
        let id: Uuid = sqlx::query_scalar(INSERT_VIDEO)
            .bind(&video.title)
            .bind(size)
            .bind(video.status.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| translate(OP_CREATE, e))?;

        Ok(VideoId::new(id.to_string()))
    }

    async fn get(&self, id: &VideoId) -> StorageResult<Video> {
        self.ensure_open(OP_GET)?;

        let key = parse_key(id).ok_or(StorageError::IdNotFound { op: OP_GET })?;

        let row: VideoRow = sqlx::query_as(SELECT_VIDEO)
            .bind(key)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| translate(OP_GET, e))?;

        row.into_video(OP_GET)
    }

    async fn close(&self) -> StorageResult<()> {
        self.shutdown().await
    }
}
