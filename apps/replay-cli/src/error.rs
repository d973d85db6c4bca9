use game_session::DomainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: invalid event: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ReplayError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn decode(line: usize, source: serde_json::Error) -> Self {
        Self::Decode { line, source }
    }
}
