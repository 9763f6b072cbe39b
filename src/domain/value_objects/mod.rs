//! Value objects - Immutable objects defined by their attributes

mod ids;
mod room;

pub use ids::*;
pub use room::{RoomCatalog, RoomCategory, RoomTemplate};
