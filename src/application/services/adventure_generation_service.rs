//! Adventure generation service - Builds a new randomized adventure
//!
//! Generation runs once per adventure: it draws a room count, samples that
//! many distinct templates from the catalog, and assembles the aggregate in
//! draw order. The result is immutable apart from per-room resolution.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

use crate::application::dto::{AdventureStarted, RoomPreview};
use crate::application::ports::outbound::{AdventureRepositoryPort, RandomSourcePort};
use crate::domain::entities::{Adventure, AdventureRoom};
use crate::domain::value_objects::{PlayerId, RoomCatalog};

/// Fewest rooms an adventure can have
const MIN_ROOMS: usize = 2;
/// Most rooms an adventure can have; the catalog guarantees this many templates
const MAX_ROOMS: usize = RoomCatalog::MAX_DRAW;

/// Adventure generation use case
#[async_trait]
pub trait AdventureGenerationService: Send + Sync {
    /// Generate a new adventure, persist it, and return its first room
    async fn start_adventure(&self, player_id: Option<PlayerId>) -> Result<AdventureStarted>;
}

/// Default implementation drawing from a fixed template catalog
pub struct AdventureGenerationServiceImpl<R: AdventureRepositoryPort> {
    repository: Arc<R>,
    random: Arc<dyn RandomSourcePort>,
    catalog: RoomCatalog,
}

impl<R: AdventureRepositoryPort> AdventureGenerationServiceImpl<R> {
    pub fn new(repository: Arc<R>, random: Arc<dyn RandomSourcePort>, catalog: RoomCatalog) -> Self {
        Self {
            repository,
            random,
            catalog,
        }
    }

    /// Build the aggregate without persisting it
    fn generate(&self, player_id: Option<PlayerId>) -> Adventure {
        let rooms = draw_rooms(&self.catalog, self.random.as_ref());
        Adventure::new(player_id, rooms)
    }
}

#[async_trait]
impl<R: AdventureRepositoryPort> AdventureGenerationService for AdventureGenerationServiceImpl<R> {
    async fn start_adventure(&self, player_id: Option<PlayerId>) -> Result<AdventureStarted> {
        let adventure = self.generate(player_id);

        self.repository
            .create(&adventure)
            .await
            .context("Failed to persist generated adventure")?;

        info!(
            adventure_id = %adventure.id,
            rooms = adventure.rooms.len(),
            player_id = ?player_id,
            "Started new adventure"
        );

        let first_room = adventure
            .rooms
            .first()
            .context("Generated adventure has no rooms")?;

        Ok(AdventureStarted {
            adventure_id: adventure.id,
            total_rooms: adventure.rooms.len(),
            current_room: RoomPreview::from(first_room),
        })
    }
}

/// Draw a randomized, non-repeating room sequence from the catalog.
///
/// Fisher-Yates over the catalog indices, then take a prefix: the drawn
/// prefix is a uniform sample without replacement, and its order is the
/// post-shuffle order rather than the catalog order.
fn draw_rooms(catalog: &RoomCatalog, random: &dyn RandomSourcePort) -> Vec<AdventureRoom> {
    let room_count = random.next_in(MIN_ROOMS as i32, MAX_ROOMS as i32 + 1) as usize;

    let mut indices: Vec<usize> = (0..catalog.len()).collect();
    for i in (1..indices.len()).rev() {
        let j = random.next_in(0, i as i32 + 1) as usize;
        indices.swap(i, j);
    }
    indices.truncate(room_count);

    indices
        .into_iter()
        .enumerate()
        .map(|(seq, template_index)| {
            AdventureRoom::from_template(&catalog.templates()[template_index], seq as u32)
        })
        .collect()
}
