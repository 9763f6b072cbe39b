//! Outbound ports - Interfaces that the application requires from external systems

mod random_port;
mod repository_port;

pub use random_port::RandomSourcePort;
pub use repository_port::AdventureRepositoryPort;
