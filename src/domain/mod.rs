//! Domain layer - Core game logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Adventure aggregate and its rooms
//! - Value Objects: Strongly-typed ids, room categories, the template catalog

pub mod entities;
pub mod value_objects;
