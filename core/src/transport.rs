//! Blocking transport execution over a `ureq::Agent`.
//!
//! Exactly one attempt per request: the agent's connection reuse and
//! timeouts apply, but there is no retry loop here. The agent must be
//! configured with `http_status_as_error(false)` so that 4xx/5xx exchanges
//! come back as data — status interpretation belongs to the client, not the
//! transport.

use log::debug;
use ureq::http::header::CONTENT_TYPE;
use ureq::Agent;

use crate::error::Error;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Send one request and reduce the completed exchange to an `HttpResponse`.
///
/// `Err(Error::Transport)` means the exchange never completed (DNS, connect,
/// timeout, TLS); any HTTP status at all is an `Ok`.
pub(crate) fn execute(agent: &Agent, req: &HttpRequest) -> Result<HttpResponse, Error> {
    let mut response = match (req.method, &req.body) {
        (HttpMethod::Get, _) => {
            let mut rb = agent.get(req.url.as_str());
            for (name, value) in &req.headers {
                rb = rb.header(name.as_str(), value.as_str());
            }
            rb.call()
        }
        (HttpMethod::Delete, _) => {
            let mut rb = agent.delete(req.url.as_str());
            for (name, value) in &req.headers {
                rb = rb.header(name.as_str(), value.as_str());
            }
            rb.call()
        }
        (HttpMethod::Put, body) => {
            let mut rb = agent.put(req.url.as_str());
            for (name, value) in &req.headers {
                rb = rb.header(name.as_str(), value.as_str());
            }
            match body {
                Some(bytes) => rb.send(bytes.as_slice()),
                None => rb.send_empty(),
            }
        }
        (HttpMethod::Post, body) => {
            let mut rb = agent.post(req.url.as_str());
            for (name, value) in &req.headers {
                rb = rb.header(name.as_str(), value.as_str());
            }
            match body {
                Some(bytes) => rb.send(bytes.as_slice()),
                None => rb.send_empty(),
            }
        }
    }?;

    let status = response.status().as_u16();
    debug!("{} {} -> {}", req.method.as_str(), req.url, status);

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = response.body_mut().read_to_vec()?;

    Ok(HttpResponse {
        status,
        content_type,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refused_connection_surfaces_as_transport_error() {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        // Port 1 is unassigned on any sane test host.
        let req = HttpRequest {
            method: HttpMethod::Get,
            url: "http://127.0.0.1:1/api/overview".to_string(),
            headers: Vec::new(),
            body: None,
        };
        let err = execute(&agent, &req).unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }
}
