//! Repository port - Interface for adventure persistence
//!
//! Application services depend on this trait, not on a concrete store. The
//! engine only needs whole-aggregate reads and writes; how a backing store
//! lays the data out is its own business.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::Adventure;
use crate::domain::value_objects::{AdventureId, PlayerId};

/// Repository port for Adventure aggregate operations
#[async_trait]
pub trait AdventureRepositoryPort: Send + Sync {
    /// Persist a newly generated adventure
    async fn create(&self, adventure: &Adventure) -> Result<()>;

    /// Get an adventure (with its rooms) by ID
    async fn get(&self, id: AdventureId) -> Result<Option<Adventure>>;

    /// Write back a mutated adventure aggregate
    async fn update(&self, adventure: &Adventure) -> Result<()>;

    /// List a player's adventures, most recently started first
    async fn list_by_player(&self, player_id: PlayerId) -> Result<Vec<Adventure>>;
}
