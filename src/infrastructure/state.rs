//! Shared application state

use std::sync::Arc;

use crate::application::ports::outbound::RandomSourcePort;
use crate::application::services::{AdventureGenerationServiceImpl, ChoiceResolutionServiceImpl};
use crate::domain::value_objects::RoomCatalog;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::InMemoryAdventureRepository;
use crate::infrastructure::random::StdRandomSource;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    /// Exposed for the read-only query routes, which pass straight through
    /// to storage without touching the engine
    pub repository: Arc<InMemoryAdventureRepository>,
    // Application services
    pub generation_service: AdventureGenerationServiceImpl<InMemoryAdventureRepository>,
    pub choice_service: ChoiceResolutionServiceImpl<InMemoryAdventureRepository>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let repository = Arc::new(InMemoryAdventureRepository::new());

        // One process-wide random source shared by generator and resolver
        let random: Arc<dyn RandomSourcePort> = Arc::new(StdRandomSource::new());

        let generation_service = AdventureGenerationServiceImpl::new(
            repository.clone(),
            random.clone(),
            RoomCatalog::default(),
        );
        let choice_service = ChoiceResolutionServiceImpl::new(repository.clone(), random);

        Self {
            config,
            repository,
            generation_service,
            choice_service,
        }
    }
}
