//! Plain-data HTTP request/response types.
//!
//! # Design
//! A request is fully assembled as data before anything touches the network,
//! and a response is reduced to data before anything inspects it. This keeps
//! request construction and status interpretation deterministic and testable;
//! only `transport` performs I/O. Both types are owned by a single call and
//! discarded when the exchange completes — nothing is cached.

/// HTTP method for a management API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
    Delete,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Post => "POST",
        }
    }
}

/// A fully assembled request: absolute URL, headers, optional JSON body.
///
/// Built by `Client::build_request`, executed once by the transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// A completed exchange: status, content type, raw body bytes.
///
/// Status classification happens before any attempt to decode `body`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}
