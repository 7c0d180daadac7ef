//! Client configuration and the generic request/response pipeline.
//!
//! # Design
//! `Client` holds the endpoint, the precomputed Basic credentials, and the
//! transport agent; it carries no mutable state, so one instance serves any
//! number of threads. Every resource operation funnels through the same
//! pipeline: `build_request` (pure data assembly) → `transport::execute`
//! (one attempt) → `interpret` (status classification) → `decode_body`
//! (typed JSON decode). Classification always runs before decoding: an
//! error body decoded as a success shape would yield a misleading empty
//! record instead of surfacing the failure.

use std::time::Duration;

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use ureq::Agent;
use url::Url;

use crate::error::Error;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Synchronous client for the broker's HTTP management API.
///
/// Immutable after construction; cloning shares the underlying connection
/// pool. All operations block for one request/response exchange and make
/// exactly one attempt.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Url,
    authorization: String,
    agent: Agent,
}

impl Client {
    /// Create a client with a default agent (30 s global timeout).
    ///
    /// Performs no I/O: the endpoint is parsed and the credentials encoded,
    /// nothing else.
    pub fn new(endpoint: &str, username: &str, password: &str) -> Result<Self, Error> {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(DEFAULT_TIMEOUT))
            .build()
            .new_agent();
        Self::with_agent(endpoint, username, password, agent)
    }

    /// Create a client over a caller-configured agent (timeouts, TLS,
    /// proxy). The agent must be built with `http_status_as_error(false)`
    /// so non-2xx responses reach the status classifier as data.
    pub fn with_agent(
        endpoint: &str,
        username: &str,
        password: &str,
        agent: Agent,
    ) -> Result<Self, Error> {
        let base_url = Url::parse(endpoint)?;
        let credentials = BASE64_STANDARD.encode(format!("{username}:{password}"));
        Ok(Self {
            base_url,
            authorization: format!("Basic {credentials}"),
            agent,
        })
    }

    /// The configured base endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.base_url
    }

    /// Assemble a request targeting `base_url + "/api/" + path`.
    ///
    /// `path` is already escaped; see [`crate::path`]. `Authorization` is
    /// attached always, `Content-Type: application/json` only when a body is
    /// present. Pure data assembly — no I/O.
    pub(crate) fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<HttpRequest, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let url = format!("{base}/api/{path}");
        // Reject a combined URL the transport could not parse.
        Url::parse(&url)?;

        let mut headers = vec![("authorization".to_string(), self.authorization.clone())];
        if body.is_some() {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// build → execute → classify. Operations that only need the status
    /// confirmed (put/delete) take the raw envelope as their result; a 404
    /// or 500 still fails here even though no body was requested.
    pub(crate) fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse, Error> {
        let req = self.build_request(method, path, body)?;
        let response = transport::execute(&self.agent, &req)?;
        interpret(response)
    }

    /// [`request`](Self::request) plus decoding of the success body.
    pub(crate) fn request_decoded<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T, Error> {
        let response = self.request(method, path, body)?;
        decode_body(&response)
    }
}

/// Diagnostic shape the broker attaches to 4xx/5xx responses.
#[derive(Debug, Deserialize)]
struct BrokerDiagnostic {
    #[serde(default)]
    error: String,
    #[serde(default)]
    reason: String,
}

/// Classify a completed exchange by status. 2xx passes the envelope
/// through; everything else — 4xx/5xx, and any stray 1xx/3xx that reaches
/// this layer — becomes `Error::Status` with the raw status preserved.
fn interpret(response: HttpResponse) -> Result<HttpResponse, Error> {
    match response.status {
        200..=299 => Ok(response),
        status => Err(Error::Status {
            status,
            message: diagnostic_message(&response),
        }),
    }
}

/// Best-effort extraction of the broker's `error`/`reason` diagnostic;
/// falls back to the canonical status phrase when the body is empty or not
/// that shape.
fn diagnostic_message(response: &HttpResponse) -> String {
    match serde_json::from_slice::<BrokerDiagnostic>(&response.body) {
        Ok(diag) if !diag.error.is_empty() => {
            if diag.reason.is_empty() {
                diag.error
            } else {
                format!("{}: {}", diag.error, diag.reason)
            }
        }
        _ => {
            debug!("no diagnostic body for HTTP {}", response.status);
            status_phrase(response.status)
        }
    }
}

fn status_phrase(status: u16) -> String {
    ureq::http::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map(str::to_string)
        .unwrap_or_else(|| format!("status {status}"))
}

/// Decode a success body into the caller's shape. Unknown fields are
/// ignored so newer broker responses keep working with older clients; a
/// JSON array decodes into a `Vec` preserving server order.
fn decode_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, Error> {
    serde_json::from_slice(&response.body).map_err(Error::Decode)
}
