//! Domain layer - Video metadata and the storage error taxonomy.

pub mod error;
pub mod video;

pub use error::{StorageError, StorageResult};
pub use video::{NewVideo, Video, VideoId, VideoStatus};
