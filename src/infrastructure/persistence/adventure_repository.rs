//! In-memory adventure repository

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::outbound::AdventureRepositoryPort;
use crate::domain::entities::Adventure;
use crate::domain::value_objects::{AdventureId, PlayerId};

/// Adventure store backed by a process-local map
pub struct InMemoryAdventureRepository {
    adventures: RwLock<HashMap<AdventureId, Adventure>>,
}

impl InMemoryAdventureRepository {
    pub fn new() -> Self {
        Self {
            adventures: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryAdventureRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdventureRepositoryPort for InMemoryAdventureRepository {
    async fn create(&self, adventure: &Adventure) -> Result<()> {
        let mut adventures = self.adventures.write().await;
        adventures.insert(adventure.id, adventure.clone());
        Ok(())
    }

    async fn get(&self, id: AdventureId) -> Result<Option<Adventure>> {
        let adventures = self.adventures.read().await;
        Ok(adventures.get(&id).cloned())
    }

    async fn update(&self, adventure: &Adventure) -> Result<()> {
        let mut adventures = self.adventures.write().await;
        adventures.insert(adventure.id, adventure.clone());
        Ok(())
    }

    async fn list_by_player(&self, player_id: PlayerId) -> Result<Vec<Adventure>> {
        let adventures = self.adventures.read().await;
        let mut owned: Vec<Adventure> = adventures
            .values()
            .filter(|a| a.player_id == Some(player_id))
            .cloned()
            .collect();
        // Most recently started first
        owned.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AdventureRoom;
    use crate::domain::value_objects::RoomTemplate;

    fn adventure_for(player_id: Option<PlayerId>) -> Adventure {
        let template = RoomTemplate::new(
            "Cell",
            crate::domain::value_objects::RoomCategory::Trap,
            "Bare stone.",
        );
        let rooms = vec![
            AdventureRoom::from_template(&template, 0),
            AdventureRoom::from_template(&template, 1),
        ];
        Adventure::new(player_id, rooms)
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let repository = InMemoryAdventureRepository::new();
        let adventure = adventure_for(None);
        let id = adventure.id;

        repository.create(&adventure).await.unwrap();
        let loaded = repository.get(id).await.unwrap().unwrap();
        assert_eq!(loaded.id, id);
        assert_eq!(loaded.rooms.len(), 2);

        assert!(repository.get(AdventureId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_overwrites_the_aggregate() {
        let repository = InMemoryAdventureRepository::new();
        let mut adventure = adventure_for(None);
        repository.create(&adventure).await.unwrap();

        adventure.total_score = 7;
        repository.update(&adventure).await.unwrap();

        let loaded = repository.get(adventure.id).await.unwrap().unwrap();
        assert_eq!(loaded.total_score, 7);
    }

    #[tokio::test]
    async fn player_listing_is_newest_first() {
        let repository = InMemoryAdventureRepository::new();
        let player_id = PlayerId::new();

        let mut older = adventure_for(Some(player_id));
        older.start_time = older.start_time - chrono::Duration::minutes(5);
        let newer = adventure_for(Some(player_id));
        let unrelated = adventure_for(Some(PlayerId::new()));

        repository.create(&older).await.unwrap();
        repository.create(&newer).await.unwrap();
        repository.create(&unrelated).await.unwrap();

        let listed = repository.list_by_player(player_id).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, newer.id);
        assert_eq!(listed[1].id, older.id);
    }
}
