//! vidhost - Video metadata storage
//!
//! Hexagonal Architecture:
//! - domain/: Video records and the storage error taxonomy
//! - ports/: Trait definitions
//! - adapters/: Concrete implementations (PostgreSQL, in-memory)
//! - application/: Generic services
//! - config: Environment configuration
//! - telemetry: Tracing setup
//!
//! # Features
//! - `postgres` (default): sqlx-backed PostgreSQL store and the `video-hosting` binary

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;

// Re-exports for convenience
pub use adapters::memory::InMemoryVideoRepository;
pub use config::{AppConfig, DbConfig, Mode};
pub use domain::{NewVideo, StorageError, StorageResult, Video, VideoId, VideoStatus};
pub use ports::VideoRepository;

#[cfg(feature = "postgres")]
pub use adapters::postgres::PostgresVideoRepository;
