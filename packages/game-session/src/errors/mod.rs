//! Error handling for the game session core.

pub mod domain;

pub use domain::DomainError;
