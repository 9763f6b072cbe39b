//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so the HTTP adapter can serialize
//! results without reaching into domain internals.

pub mod adventure;

pub use adventure::*;
