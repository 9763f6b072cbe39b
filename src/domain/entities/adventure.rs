//! Adventure aggregate - One randomized play-through and its rooms
//!
//! An adventure is created whole (rooms drawn up front, in final order) and
//! then mutated one room at a time until it reaches a terminal status. Rooms
//! are never reordered after creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AdventureId, PlayerId, RoomCategory, RoomTemplate};

/// Lifecycle status of an adventure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdventureStatus {
    InProgress,
    Completed,
    Dead,
}

impl AdventureStatus {
    /// Terminal statuses accept no further choices
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Dead)
    }
}

/// One randomized play-through with an ordered room sequence and running score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adventure {
    pub id: AdventureId,
    /// Owning player; adventures may be anonymous
    pub player_id: Option<PlayerId>,
    pub status: AdventureStatus,
    pub total_score: i32,
    pub start_time: DateTime<Utc>,
    /// Set only on the terminal transition
    pub end_time: Option<DateTime<Utc>>,
    /// Fixed length and order once created; `sequence_index` is contiguous from 0
    pub rooms: Vec<AdventureRoom>,
}

/// A single room within an adventure, instantiated from a catalog template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdventureRoom {
    /// 0-based position in the adventure
    pub sequence_index: u32,
    pub room_title: String,
    pub room_type: RoomCategory,
    pub description: String,
    /// `None` until the player resolves this room
    pub choice: Option<String>,
    /// Points gained or lost in this room; 0 until resolved
    pub score_delta: i32,
}

impl AdventureRoom {
    /// Instantiate a room from a template at the given position
    pub fn from_template(template: &RoomTemplate, sequence_index: u32) -> Self {
        Self {
            sequence_index,
            room_title: template.title.clone(),
            room_type: template.category,
            description: template.description.clone(),
            choice: None,
            score_delta: 0,
        }
    }

    /// A room is resolved exactly when a choice has been recorded
    pub fn is_resolved(&self) -> bool {
        self.choice.is_some()
    }
}

impl Adventure {
    /// Create a fresh in-progress adventure over an already-drawn room sequence
    pub fn new(player_id: Option<PlayerId>, rooms: Vec<AdventureRoom>) -> Self {
        Self {
            id: AdventureId::new(),
            player_id,
            status: AdventureStatus::InProgress,
            total_score: 0,
            start_time: Utc::now(),
            end_time: None,
            rooms,
        }
    }

    /// First unresolved room in sequence order, if any
    pub fn current_room(&self) -> Option<&AdventureRoom> {
        self.rooms.iter().find(|r| !r.is_resolved())
    }

    /// Index into `rooms` of the first unresolved room
    pub fn current_room_position(&self) -> Option<usize> {
        self.rooms.iter().position(|r| !r.is_resolved())
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Transition to a terminal status based on the running score.
    ///
    /// A non-positive total means death; otherwise the adventure completed.
    pub fn finish(&mut self) {
        self.status = if self.total_score <= 0 {
            AdventureStatus::Dead
        } else {
            AdventureStatus::Completed
        };
        self.end_time = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::RoomCatalog;

    fn two_rooms() -> Vec<AdventureRoom> {
        let catalog = RoomCatalog::default();
        vec![
            AdventureRoom::from_template(catalog.get(0).unwrap(), 0),
            AdventureRoom::from_template(catalog.get(1).unwrap(), 1),
        ]
    }

    #[test]
    fn new_adventure_starts_in_progress_with_zero_score() {
        let adventure = Adventure::new(None, two_rooms());
        assert_eq!(adventure.status, AdventureStatus::InProgress);
        assert_eq!(adventure.total_score, 0);
        assert!(adventure.end_time.is_none());
        assert!(adventure.rooms.iter().all(|r| !r.is_resolved()));
        assert!(adventure.rooms.iter().all(|r| r.score_delta == 0));
    }

    #[test]
    fn current_room_follows_sequence_order() {
        let mut adventure = Adventure::new(None, two_rooms());
        assert_eq!(adventure.current_room().unwrap().sequence_index, 0);

        adventure.rooms[0].choice = Some("Flee".to_string());
        assert_eq!(adventure.current_room().unwrap().sequence_index, 1);

        adventure.rooms[1].choice = Some("Open".to_string());
        assert!(adventure.current_room().is_none());
    }

    #[test]
    fn finish_picks_dead_on_non_positive_score() {
        let mut adventure = Adventure::new(None, two_rooms());
        adventure.total_score = -5;
        adventure.finish();
        assert_eq!(adventure.status, AdventureStatus::Dead);
        assert!(adventure.end_time.is_some());

        let mut adventure = Adventure::new(None, two_rooms());
        adventure.total_score = 0;
        adventure.finish();
        assert_eq!(adventure.status, AdventureStatus::Dead);
    }

    #[test]
    fn finish_picks_completed_on_positive_score() {
        let mut adventure = Adventure::new(None, two_rooms());
        adventure.total_score = 12;
        adventure.finish();
        assert_eq!(adventure.status, AdventureStatus::Completed);
        assert!(adventure.end_time.is_some());
    }

    #[test]
    fn room_copies_template_fields() {
        let catalog = RoomCatalog::default();
        let template = catalog.get(0).unwrap();
        let room = AdventureRoom::from_template(template, 3);
        assert_eq!(room.sequence_index, 3);
        assert_eq!(room.room_title, template.title);
        assert_eq!(room.room_type, template.category);
        assert_eq!(room.description, template.description);
        assert!(!room.is_resolved());
    }
}
