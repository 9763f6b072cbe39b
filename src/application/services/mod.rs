//! Application services - Use case implementations
//!
//! Each service follows hexagonal architecture principles: it depends on
//! outbound ports (repository, random source) and returns domain entities
//! or DTOs to the transport layer.

pub mod adventure_generation_service;
pub mod choice_resolution_service;

pub use adventure_generation_service::{
    AdventureGenerationService, AdventureGenerationServiceImpl,
};
pub use choice_resolution_service::{
    ChoiceError, ChoiceResolutionService, ChoiceResolutionServiceImpl,
};
