//! Choice resolution service - Advances an adventure one room per choice
//!
//! The state machine: `InProgress` -> `Completed` | `Dead`, both terminal.
//! Each submission resolves exactly one room (the first unresolved one in
//! sequence order), applies a score delta from the category/choice outcome
//! table, and then decides whether the adventure continues. A non-positive
//! running total kills the adventure immediately, even with rooms left;
//! exhausting the rooms with a positive total completes it.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::application::dto::{ChoiceOutcome, RoomPreview};
use crate::application::ports::outbound::{AdventureRepositoryPort, RandomSourcePort};
use crate::domain::entities::AdventureStatus;
use crate::domain::value_objects::{AdventureId, RoomCategory};

/// Business-level failures of a choice submission
#[derive(Debug, Error)]
pub enum ChoiceError {
    /// The referenced adventure does not exist
    #[error("adventure not found")]
    NotFound,

    /// The adventure is already terminal; the submission had no effect
    #[error("adventure already finished")]
    AlreadyFinished,

    /// All rooms are resolved but the status was still in progress.
    /// Indicates corrupted data upstream, not an engine bug.
    #[error("no room left to play")]
    NoRoomToPlay,

    /// The backing store failed
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Choice submission use case
#[async_trait]
pub trait ChoiceResolutionService: Send + Sync {
    /// Resolve the current room of an in-progress adventure with the
    /// submitted choice and report how the adventure advanced.
    async fn submit_choice(
        &self,
        adventure_id: AdventureId,
        choice: &str,
    ) -> Result<ChoiceOutcome, ChoiceError>;
}

/// Default implementation over the repository and random-source ports
pub struct ChoiceResolutionServiceImpl<R: AdventureRepositoryPort> {
    repository: Arc<R>,
    random: Arc<dyn RandomSourcePort>,
    /// One gate per in-flight adventure id. The read-modify-write of an
    /// aggregate must be serialized so two submissions cannot both resolve
    /// the same room or double-apply a delta.
    gates: Mutex<HashMap<AdventureId, Arc<Mutex<()>>>>,
}

impl<R: AdventureRepositoryPort> ChoiceResolutionServiceImpl<R> {
    pub fn new(repository: Arc<R>, random: Arc<dyn RandomSourcePort>) -> Self {
        Self {
            repository,
            random,
            gates: Mutex::new(HashMap::new()),
        }
    }

    async fn gate_for(&self, adventure_id: AdventureId) -> Arc<Mutex<()>> {
        let mut gates = self.gates.lock().await;
        gates
            .entry(adventure_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// A gate is only worth keeping while the adventure can still be
    /// mutated; terminal, missing, and corrupt adventures retire theirs
    async fn drop_gate(&self, adventure_id: AdventureId) {
        self.gates.lock().await.remove(&adventure_id);
    }

    /// Core read-modify-write of one submission. The caller must hold the
    /// adventure's gate.
    async fn advance(
        &self,
        adventure_id: AdventureId,
        choice: &str,
    ) -> Result<ChoiceOutcome, ChoiceError> {
        let mut adventure = self
            .repository
            .get(adventure_id)
            .await?
            .ok_or(ChoiceError::NotFound)?;

        if adventure.is_terminal() {
            return Err(ChoiceError::AlreadyFinished);
        }

        let position = adventure
            .current_room_position()
            .ok_or(ChoiceError::NoRoomToPlay)?;

        let (category, room_index) = {
            let room = &adventure.rooms[position];
            (room.room_type, room.sequence_index)
        };

        let delta = resolve_outcome(category, choice, self.random.as_ref());

        {
            let room = &mut adventure.rooms[position];
            room.choice = Some(choice.to_string());
            room.score_delta = delta;
        }
        adventure.total_score += delta;

        // By the ordering invariant this is the room right after the current
        // one, when any rooms remain.
        let next_room = adventure.current_room().map(RoomPreview::from);

        if next_room.is_none() || adventure.total_score <= 0 {
            adventure.finish();
        }

        let outcome = ChoiceOutcome {
            new_score: adventure.total_score,
            room_index,
            is_complete: adventure.status == AdventureStatus::Completed,
            is_dead: adventure.status == AdventureStatus::Dead,
            next_room: if adventure.is_terminal() {
                None
            } else {
                next_room
            },
        };

        self.repository.update(&adventure).await?;

        if adventure.is_terminal() {
            info!(
                adventure_id = %adventure_id,
                status = ?adventure.status,
                total_score = adventure.total_score,
                "Adventure reached terminal status"
            );
        } else {
            debug!(
                adventure_id = %adventure_id,
                room_index,
                delta,
                total_score = adventure.total_score,
                "Resolved room"
            );
        }

        Ok(outcome)
    }
}

#[async_trait]
impl<R: AdventureRepositoryPort> ChoiceResolutionService for ChoiceResolutionServiceImpl<R> {
    async fn submit_choice(
        &self,
        adventure_id: AdventureId,
        choice: &str,
    ) -> Result<ChoiceOutcome, ChoiceError> {
        let gate = self.gate_for(adventure_id).await;
        let guard = gate.lock().await;
        let result = self.advance(adventure_id, choice).await;
        drop(guard);

        // Retire the gate once the adventure can no longer be mutated;
        // leaving it registered would pin an entry per errored id forever.
        let retire = match &result {
            Ok(outcome) => outcome.is_complete || outcome.is_dead,
            Err(ChoiceError::NotFound)
            | Err(ChoiceError::AlreadyFinished)
            | Err(ChoiceError::NoRoomToPlay) => true,
            // The adventure may still be in progress; keep serializing on it
            Err(ChoiceError::Storage(_)) => false,
        };
        if retire {
            self.drop_gate(adventure_id).await;
        }

        result
    }
}

/// Score delta for a (category, choice) pair.
///
/// Unrecognized pairs resolve to 0 rather than erroring; the engine stays
/// permissive about choice strings and lets the score speak.
fn resolve_outcome(category: RoomCategory, choice: &str, random: &dyn RandomSourcePort) -> i32 {
    match (category, choice) {
        // 50% success
        (RoomCategory::Enemy, "Fight") => {
            if random.next_in(0, 2) == 0 {
                10
            } else {
                -5
            }
        }
        (RoomCategory::Enemy, "Flee") => 2,
        (RoomCategory::Enemy, "Search") => random.next_in(-5, 8),
        // 1-in-3 chance the chest bites back
        (RoomCategory::Treasure, "Open") => {
            if random.next_in(0, 3) == 0 {
                -10
            } else {
                15
            }
        }
        (RoomCategory::Treasure, "Ignore") => 0,
        (RoomCategory::Treasure, "Search") => random.next_in(5, 16),
        (RoomCategory::Trap, "Fight") => -3,
        (RoomCategory::Trap, "Flee") => 5,
        (RoomCategory::Trap, "Search") => random.next_in(-15, 10),
        _ => {
            debug!(category = %category, choice, "Unrecognized choice, scoring 0");
            0
        }
    }
}
