//! Persistence adapters
//!
//! The engine treats storage as an external collaborator reached through the
//! repository port; this in-memory adapter keeps the service runnable and
//! testable without a database.

mod adventure_repository;

pub use adventure_repository::InMemoryAdventureRepository;
