//! Response DTOs for the cache API
//!
//! Defines the JSON bodies returned alongside raw payloads.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for PUT /entries
#[derive(Debug, Clone, Serialize)]
pub struct AddResponse {
    /// Success message
    pub message: String,
    /// The key that was stored
    pub key: String,
}

impl AddResponse {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' cached", key),
            key,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of lookups that found the key
    pub hits: u64,
    /// Number of lookups that missed
    pub misses: u64,
    /// Number of entries removed by the reaper
    pub reaped: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Configured TTL in seconds
    pub ttl_secs: f64,
    /// Configured sweep period in seconds
    pub reap_interval_secs: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics and settings
    pub fn new(stats: &CacheStats, ttl_secs: f64, reap_interval_secs: f64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            reaped: stats.reaped,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            ttl_secs,
            reap_interval_secs,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_response_serialize() {
        let resp = AddResponse::new("pokemon:1");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("pokemon:1"));
        assert!(json.contains("cached"));
    }

    #[test]
    fn test_stats_response_from_stats() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            reaped: 5,
            total_entries: 12,
        };
        let resp = StatsResponse::new(&stats, 2.0, 0.5);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.reaped, 5);
        assert_eq!(resp.total_entries, 12);
        assert_eq!(resp.reap_interval_secs, 0.5);
    }

    #[test]
    fn test_stats_response_zero_requests() {
        let resp = StatsResponse::new(&CacheStats::new(), 1.0, 1.0);
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
