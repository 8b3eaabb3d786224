use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Store-assigned identifier of a video record.
///
/// Opaque to callers: only ids returned by `VideoRepository::create` are
/// meaningful, and the store never accepts one for a new record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for VideoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for VideoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Processing state of a video.
///
/// The vocabulary is open: nothing in this crate moves a video between
/// states, so values other than the known ones are kept verbatim.
///
/// Equality and hashing compare the string form, so `Other("ready")` and
/// `Ready` are the same status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VideoStatus {
    Pending,
    Ready,
    Failed,
    Other(String),
}

impl VideoStatus {
    pub fn as_str(&self) -> &str {
        match self {
            VideoStatus::Pending => "pending",
            VideoStatus::Ready => "ready",
            VideoStatus::Failed => "failed",
            VideoStatus::Other(s) => s,
        }
    }
}

impl PartialEq for VideoStatus {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for VideoStatus {}

impl Hash for VideoStatus {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for VideoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for VideoStatus {
    fn from(s: &str) -> Self {
        match s {
            "pending" => VideoStatus::Pending,
            "ready" => VideoStatus::Ready,
            "failed" => VideoStatus::Failed,
            other => VideoStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for VideoStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pending" | "ready" | "failed" => VideoStatus::from(s.as_str()),
            _ => VideoStatus::Other(s),
        }
    }
}

impl From<VideoStatus> for String {
    fn from(status: VideoStatus) -> Self {
        match status {
            VideoStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

/// Metadata for a video that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVideo {
    pub title: String,
    /// Payload length in bytes
    pub size: u64,
    pub status: VideoStatus,
}

impl NewVideo {
    pub fn new(title: impl Into<String>, size: u64, status: VideoStatus) -> Self {
        Self {
            title: title.into(),
            size,
            status,
        }
    }
}

/// A stored video record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    pub size: u64,
    pub status: VideoStatus,
}

impl Video {
    pub fn from_new(id: VideoId, video: &NewVideo) -> Self {
        Self {
            id,
            title: video.title.clone(),
            size: video.size,
            status: video.status.clone(),
        }
    }
}
