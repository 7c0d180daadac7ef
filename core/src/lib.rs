//! Synchronous typed client for RabbitMQ's HTTP management API.
//!
//! # Overview
//! Method calls on [`Client`] become authenticated HTTP requests against the
//! broker's REST resources and HTTP responses become typed results or typed
//! errors. The generic plumbing — path escaping, request assembly, one-shot
//! transport execution, status classification, JSON decoding — is written
//! once and shared by every resource operation; the resource modules
//! (currently federation upstreams) are thin call sites over it.
//!
//! # Design
//! - `Client` is immutable after construction: base URL, precomputed Basic
//!   credentials, and a `ureq::Agent`. One instance can be shared freely
//!   across threads; the agent owns connection reuse.
//! - Calls are blocking and single-attempt. There is no retry, backoff, or
//!   caching; a failed exchange surfaces as an [`Error`] immediately.
//! - Request assembly is pure data (`HttpRequest`), so it is unit-tested
//!   without a live broker; the mock-server crate covers the wire path.

pub mod client;
pub mod error;
pub mod federation;
pub mod http;
pub mod path;
mod transport;

pub use client::Client;
pub use error::Error;
pub use federation::{FederationDefinition, FederationUpstream};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
