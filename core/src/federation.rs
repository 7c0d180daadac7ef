//! Federation upstream parameters: typed shapes and resource operations.
//!
//! These are thin, declarative call sites over the generic pipeline in
//! `client`: build an escaped path, optionally serialize a definition, and
//! let the shared plumbing handle transport, classification, and decoding.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::http::{HttpMethod, HttpResponse};
use crate::path;

/// Tunables controlling how a federation link consumes from its upstream.
///
/// Numeric fields are always emitted, zero included, so a PUT can explicitly
/// reset a value on the broker; only `ack-mode` is dropped when empty.
/// Missing fields default on deserialization, which keeps older clients
/// working against newer brokers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FederationDefinition {
    pub uri: String,
    /// Seconds before an idle link's upstream queue is deleted.
    pub expires: i64,
    /// Milliseconds; applied to the upstream queue.
    pub message_ttl: i32,
    pub max_hops: i64,
    pub prefetch_count: i64,
    /// Seconds to wait before reconnecting after a link failure.
    pub reconnect_delay: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ack_mode: String,
    pub trust_user_id: bool,
    pub exchange: String,
    pub queue: String,
}

/// One configured federation upstream, identified by `(vhost, name)`.
///
/// `name` and `vhost` are filled by the broker on reads; a PUT body carries
/// only the `value` envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FederationUpstream {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vhost: String,
    #[serde(rename = "value")]
    pub definition: FederationDefinition,
}

impl Client {
    /// `GET /api/parameters/federation-upstream/{vhost}/{name}`
    ///
    /// An absent upstream surfaces as a 404 `Error::Status`; see
    /// [`Error::is_not_found`].
    pub fn get_federation_upstream(
        &self,
        vhost: &str,
        name: &str,
    ) -> Result<FederationUpstream, Error> {
        let path = path::join(&["parameters", "federation-upstream", vhost, name]);
        self.request_decoded(HttpMethod::Get, &path, None)
    }

    /// `GET /api/parameters/federation-upstream`
    ///
    /// Yields every configured upstream across all vhosts, in server order;
    /// an empty broker yields an empty vec, not an error.
    pub fn list_federation_upstreams(&self) -> Result<Vec<FederationUpstream>, Error> {
        self.request_decoded(HttpMethod::Get, "parameters/federation-upstream", None)
    }

    /// `PUT /api/parameters/federation-upstream/{vhost}/{name}`
    ///
    /// Creates (201) or updates (204) the upstream. The broker sends no
    /// body on success, so the raw envelope is returned for status
    /// inspection; non-2xx statuses still fail the call.
    pub fn put_federation_upstream(
        &self,
        vhost: &str,
        name: &str,
        definition: FederationDefinition,
    ) -> Result<HttpResponse, Error> {
        let upstream = FederationUpstream {
            definition,
            ..FederationUpstream::default()
        };
        let body = serde_json::to_vec(&upstream).map_err(Error::Encode)?;
        let path = path::join(&["parameters", "federation-upstream", vhost, name]);
        self.request(HttpMethod::Put, &path, Some(body))
    }

    /// `DELETE /api/parameters/federation-upstream/{vhost}/{name}`
    ///
    /// 204 on success; a missing upstream is a 404 `Error::Status`, never
    /// silent success.
    pub fn delete_federation_upstream(
        &self,
        vhost: &str,
        name: &str,
    ) -> Result<HttpResponse, Error> {
        let path = path::join(&["parameters", "federation-upstream", vhost, name]);
        self.request(HttpMethod::Delete, &path, None)
    }
}
