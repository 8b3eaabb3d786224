//! Adapters - Concrete implementations of ports.

pub mod memory;

#[cfg(feature = "postgres")]
pub mod postgres;
