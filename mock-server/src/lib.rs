//! Mock of the broker's management API, limited to the
//! `parameters/federation-upstream` resource.
//!
//! Mirrors the real API's observable behavior: percent-encoded vhost/name
//! path segments, `Basic` auth required on every route, 201 on create and
//! 204 on update for PUT, and the `{"error": ..., "reason": ...}` diagnostic
//! body on 404/401. DTOs are defined independently of the client crate;
//! the client's integration tests catch schema drift.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

/// One stored runtime parameter, as the management API reports it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpstreamParameter {
    pub name: String,
    pub vhost: String,
    pub value: Value,
}

/// PUT body: the definition arrives wrapped in a `value` envelope.
#[derive(Deserialize)]
pub struct PutParameter {
    pub value: Value,
}

type ErrorReply = (StatusCode, Json<Value>);

pub type Db = Arc<RwLock<HashMap<(String, String), UpstreamParameter>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/api/parameters/federation-upstream", get(list_upstreams))
        .route(
            "/api/parameters/federation-upstream/{vhost}/{name}",
            get(get_upstream).put(put_upstream).delete(delete_upstream),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn not_found() -> ErrorReply {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": "Object Not Found", "reason": "Not Found"})),
    )
}

fn check_auth(headers: &HeaderMap) -> Result<(), ErrorReply> {
    if headers.contains_key(header::AUTHORIZATION) {
        Ok(())
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "not_authorised", "reason": "Login required"})),
        ))
    }
}

async fn list_upstreams(
    State(db): State<Db>,
    headers: HeaderMap,
) -> Result<Json<Vec<UpstreamParameter>>, ErrorReply> {
    check_auth(&headers)?;
    let params = db.read().await;
    Ok(Json(params.values().cloned().collect()))
}

async fn get_upstream(
    State(db): State<Db>,
    headers: HeaderMap,
    Path((vhost, name)): Path<(String, String)>,
) -> Result<Json<UpstreamParameter>, ErrorReply> {
    check_auth(&headers)?;
    let params = db.read().await;
    params
        .get(&(vhost, name))
        .cloned()
        .map(Json)
        .ok_or_else(not_found)
}

async fn put_upstream(
    State(db): State<Db>,
    headers: HeaderMap,
    Path((vhost, name)): Path<(String, String)>,
    Json(input): Json<PutParameter>,
) -> Result<StatusCode, ErrorReply> {
    check_auth(&headers)?;
    let mut params = db.write().await;
    let record = UpstreamParameter {
        name: name.clone(),
        vhost: vhost.clone(),
        value: input.value,
    };
    let replaced = params.insert((vhost, name), record).is_some();
    Ok(if replaced {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::CREATED
    })
}

async fn delete_upstream(
    State(db): State<Db>,
    headers: HeaderMap,
    Path((vhost, name)): Path<(String, String)>,
) -> Result<StatusCode, ErrorReply> {
    check_auth(&headers)?;
    let mut params = db.write().await;
    params
        .remove(&(vhost, name))
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(not_found)
}
