//! Asynchronous networking manager
//!
//! This module provides:
//! - **Transport seam**: the [`NetworkSession`] capability trait, with a
//!   production adapter over the HTTP client
//! - **Manager**: the public entry point that issues requests and maps
//!   transport replies into results
//!
//! Each call is a single-shot request/response. The manager keeps no
//! per-request state, imposes no timeout of its own, and never retries.

mod error;
mod transport;


pub use error::{NetworkError, SessionError};
pub use transport::{HttpSession, NetworkSession, Request, SessionReply};

use reqwest::Url;
use serde::Serialize;

/// Outcome of a manager call: raw response bytes, or a [`NetworkError`].
pub type NetworkResult = Result<Vec<u8>, NetworkError>;

/// Coordinates a transport session and maps its replies into results.
///
/// The session is fixed at construction; substitute a test double with
/// [`Manager::with_session`]. Calls are independent of each other and the
/// manager holds no state between them.
#[derive(Debug)]
pub struct Manager<S = HttpSession> {
    session: S,
}

impl Manager<HttpSession> {
    /// Manager backed by the production HTTP client.
    pub fn new() -> Self {
        Self {
            session: HttpSession::new(),
        }
    }
}

impl Default for Manager<HttpSession> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: NetworkSession> Manager<S> {
    /// Manager over an explicit session.
    pub fn with_session(session: S) -> Self {
        Self { session }
    }

    /// Fetch the raw bytes at `url` with a single GET request.
    ///
    /// Whatever timeout behavior the session has is inherited unchanged.
    pub async fn load_data(&self, url: Url) -> NetworkResult {
        tracing::debug!(url = %url, "Issuing GET request");
        let reply = self.session.get(url).await;
        map_reply(reply)
    }

    /// JSON-encode `body` and POST it to `url`, returning the raw response
    /// bytes.
    ///
    /// If the body cannot be encoded, the call resolves with
    /// [`NetworkError::EncodeBody`] and no request is issued. The response
    /// is returned undecoded; decoding is the caller's responsibility.
    pub async fn send_data<B: Serialize>(&self, url: Url, body: &B) -> NetworkResult {
        let payload = serde_json::to_vec(body)?;
        tracing::debug!(url = %url, bytes = payload.len(), "Issuing POST request");
        let reply = self.session.post(Request::post(url, payload)).await;
        map_reply(reply)
    }
}

/// A present payload always wins; an error reported alongside one is
/// advisory only and is dropped after logging.
fn map_reply(reply: SessionReply) -> NetworkResult {
    match reply {
        SessionReply {
            data: Some(data),
            error,
        } => {
            if let Some(error) = error {
                tracing::debug!(error = %error, "Dropping transport error reported alongside payload");
            }
            Ok(data)
        }
        SessionReply {
            data: None,
            error: Some(error),
        } => Err(NetworkError::Transport(error)),
        SessionReply {
            data: None,
            error: None,
        } => Err(NetworkError::NoPayload),
    }
}
