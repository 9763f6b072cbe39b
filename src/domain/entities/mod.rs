//! Domain entities - Core game objects with identity

mod adventure;

pub use adventure::{Adventure, AdventureRoom, AdventureStatus};
