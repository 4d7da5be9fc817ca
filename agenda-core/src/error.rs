//! Error types for the agenda client.

use thiserror::Error;

use crate::api::ApiFailure;

/// Errors that can occur in agenda client operations.
#[derive(Error, Debug)]
pub enum AgendaError {
    /// Input rejected before submission. Never reaches the network.
    #[error("{0}")]
    Validation(String),

    /// The server rejected the request with a structured payload.
    #[error("{0}")]
    Server(ApiFailure),

    /// The request never produced a usable response (network failure,
    /// unreadable body).
    #[error("Transport error: {0}")]
    Transport(String),

    /// A protected operation was attempted without a stored session.
    #[error("No active session")]
    SessionRequired,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
