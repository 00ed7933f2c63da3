//! In-memory storage backend for testing.
//!
//! Stores all data in HashMaps wrapped in `Arc<RwLock<_>>`. Nothing is
//! persisted; data is lost when the repository is dropped.

mod repository;

pub use repository::InMemoryRepository;
