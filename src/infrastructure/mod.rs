//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: In-memory adventure store behind the repository port
//! - HTTP: REST API routes
//! - Random: rand-backed random source adapter
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod http;
pub mod persistence;
pub mod random;
pub mod state;
