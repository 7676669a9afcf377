//! API Handlers
//!
//! HTTP request handlers for each cache endpoint.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::cache::TimedCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{AddResponse, HealthResponse, KeyQuery, StatsResponse};

/// Application state shared across all handlers.
///
/// The cache is injected here by whoever builds the router; handlers never
/// reach for a global instance.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<TimedCache>,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(cache: TimedCache) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Must be called inside a tokio runtime, since the cache starts its
    /// reaper immediately.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(TimedCache::from_config(config)?))
    }
}

/// Handler for PUT /entries?key=...
///
/// Stores the raw request body under `key`.
pub async fn add_handler(
    State(state): State<AppState>,
    Query(query): Query<KeyQuery>,
    body: Bytes,
) -> Result<Json<AddResponse>> {
    if let Some(error_msg) = query.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    debug!(key = %query.key, bytes = body.len(), "Caching payload");
    state.cache.add(query.key.clone(), body);

    Ok(Json(AddResponse::new(query.key)))
}

/// Handler for GET /entries?key=...
///
/// Returns the stored payload verbatim.
pub async fn get_handler(
    State(state): State<AppState>,
    Query(query): Query<KeyQuery>,
) -> Result<Response> {
    if let Some(error_msg) = query.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let value = state
        .cache
        .get(&query.key)
        .ok_or(CacheError::NotFound(query.key))?;

    Ok(([(header::CONTENT_TYPE, "application/octet-stream")], value).into_response())
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats();

    Json(StatsResponse::new(
        &stats,
        state.cache.ttl().as_secs_f64(),
        state.cache.reap_interval().as_secs_f64(),
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
