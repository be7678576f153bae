//! Error types for rtail-fetch.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TailError {
    #[error(transparent)]
    Size(#[from] ParseSizeError),

    #[error("invalid follow interval: must be greater than zero seconds")]
    InvalidInterval,

    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Display is the status line exactly as the server reported it.
    #[error("{status_line}")]
    Remote { status: u16, status_line: String },

    #[error("output error: {0}")]
    Sink(#[source] io::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl TailError {
    pub(crate) fn transport<E>(e: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        TailError::Transport(Box::new(e))
    }

    /// Returns `true` when the server answered with a status the tailer refuses.
    pub fn is_remote(&self) -> bool {
        matches!(self, TailError::Remote { .. })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0:?} is not a valid number of bytes")]
pub struct ParseSizeError(pub String);

pub type Result<T> = std::result::Result<T, TailError>;
