//! Transport seam between the manager and the HTTP client.

use std::future::Future;

use reqwest::{Method, Url};

use super::error::SessionError;

/// One reply per request: optional payload bytes plus an optional error.
///
/// Adapters only report what the wire gave them; the manager owns the
/// mapping of this pair into a result.
#[derive(Debug, Default)]
pub struct SessionReply {
    pub data: Option<Vec<u8>>,
    pub error: Option<SessionError>,
}

impl SessionReply {
    /// Reply carrying payload bytes.
    pub fn payload(data: Vec<u8>) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    /// Reply carrying a failure and no payload.
    pub fn failure(error: impl Into<SessionError>) -> Self {
        Self {
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Request descriptor handed to [`NetworkSession::post`].
#[derive(Debug, Clone)]
pub struct Request {
    pub url: Url,
    pub method: Method,
    pub body: Vec<u8>,
}

impl Request {
    /// POST request carrying `body` as its payload.
    pub fn post(url: Url, body: Vec<u8>) -> Self {
        Self {
            url,
            method: Method::POST,
            body,
        }
    }
}

/// Capability interface for issuing HTTP requests.
///
/// Substituted at manager construction; production code uses
/// [`HttpSession`], tests use doubles that reply without I/O.
pub trait NetworkSession: Send + Sync {
    /// Fetch `url` with a GET request.
    fn get(&self, url: Url) -> impl Future<Output = SessionReply> + Send;

    /// Submit `request` as described by its method and body.
    fn post(&self, request: Request) -> impl Future<Output = SessionReply> + Send;
}

/// Production adapter over the `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpSession {
    client: reqwest::Client,
}

impl HttpSession {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl NetworkSession for HttpSession {
    async fn get(&self, url: Url) -> SessionReply {
        read_reply(self.client.get(url).send().await).await
    }

    async fn post(&self, request: Request) -> SessionReply {
        let outcome = self
            .client
            .request(request.method, request.url)
            .body(request.body)
            .send()
            .await;
        read_reply(outcome).await
    }
}

/// Error statuses still deliver their body bytes; interpreting the status
/// is the caller's concern.
async fn read_reply(outcome: reqwest::Result<reqwest::Response>) -> SessionReply {
    match outcome {
        Ok(response) => match response.bytes().await {
            Ok(bytes) => SessionReply::payload(bytes.to_vec()),
            Err(error) => SessionReply::failure(error),
        },
        Err(error) => SessionReply::failure(error),
    }
}
