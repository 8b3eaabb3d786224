//! Ports - Trait definitions implemented by adapters.

pub mod repository;

pub use repository::VideoRepository;
