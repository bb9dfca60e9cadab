//! Error types for networking operations

use thiserror::Error;

/// Error reported by a transport session. Opaque to the manager; adapters
/// surface whatever their underlying client produced.
pub type SessionError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by manager calls
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("failed to encode request body as JSON")]
    EncodeBody(#[from] serde_json::Error),

    #[error("transport request failed")]
    Transport(#[source] SessionError),

    #[error("transport returned no payload and no diagnostic")]
    NoPayload,
}
