//! Domain-level error type.
//!
//! The reducer itself never fails: unknown or irrelevant events are logged
//! no-ops. Errors only surface from contract misuse (querying a state that
//! has not been initialised) and from rejecting an inconsistent snapshot.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A query was made against a phase that cannot answer it yet.
    #[error("not initialized: {0}")]
    Uninitialized(String),
    /// A session snapshot could not be turned into a phase.
    #[error("invalid snapshot: {0}")]
    Snapshot(String),
}

impl DomainError {
    pub fn uninitialized(detail: impl Into<String>) -> Self {
        Self::Uninitialized(detail.into())
    }
    pub fn snapshot(detail: impl Into<String>) -> Self {
        Self::Snapshot(detail.into())
    }
}
