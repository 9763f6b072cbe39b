//! Adventure DTOs returned by the generation and resolution services

use serde::Serialize;

use crate::domain::entities::AdventureRoom;
use crate::domain::value_objects::{AdventureId, RoomCategory};

/// What the player sees of a room before choosing
#[derive(Debug, Clone, Serialize)]
pub struct RoomPreview {
    pub room_title: String,
    pub room_type: RoomCategory,
    pub description: String,
}

impl From<&AdventureRoom> for RoomPreview {
    fn from(room: &AdventureRoom) -> Self {
        Self {
            room_title: room.room_title.clone(),
            room_type: room.room_type,
            description: room.description.clone(),
        }
    }
}

/// Result of starting a new adventure
#[derive(Debug, Clone, Serialize)]
pub struct AdventureStarted {
    pub adventure_id: AdventureId,
    pub total_rooms: usize,
    pub current_room: RoomPreview,
}

/// Result of resolving one room with a submitted choice
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceOutcome {
    pub new_score: i32,
    /// Sequence index of the room this choice resolved
    pub room_index: u32,
    pub is_complete: bool,
    pub is_dead: bool,
    /// Preview of the next room; absent once the adventure is terminal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_room: Option<RoomPreview>,
}
