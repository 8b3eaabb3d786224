//! PostgreSQL adapter.
//!
//! Provides the sqlx-backed implementation of `VideoRepository`. Rows live
//! in the `videos` table created by the embedded migrations:
//! - `id`: generated UUID primary key
//! - `title`: unique, the constraint behind `TitleExists`
//! - `video_size`, `video_status`

mod error;
mod pool;
mod repository;

pub use pool::PostgresVideoRepository;

/// Operation names attached to errors
const OP_NEW: &str = "storage.postgres.new";
const OP_MIGRATE: &str = "storage.postgres.migrate";
const OP_CREATE: &str = "storage.postgres.create";
const OP_GET: &str = "storage.postgres.get";
