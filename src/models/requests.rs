//! Request DTOs for the cache API
//!
//! Payloads travel as raw request bodies; only the key is structured.

use serde::Deserialize;

/// Query string naming the entry, e.g. `?key=https://pokeapi.co/api/v2/pokemon/25`
#[derive(Debug, Clone, Deserialize)]
pub struct KeyQuery {
    /// The cache key, typically a request URL
    pub key: String,
}

impl KeyQuery {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_query_deserialize() {
        let query: KeyQuery = serde_json::from_str(r#"{"key": "pokemon:1"}"#).unwrap();
        assert_eq!(query.key, "pokemon:1");
    }

    #[test]
    fn test_validate_empty_key() {
        let query = KeyQuery {
            key: "".to_string(),
        };
        assert!(query.validate().is_some());
    }

    #[test]
    fn test_validate_url_key() {
        let query = KeyQuery {
            key: "https://pokeapi.co/api/v2/location-area/1".to_string(),
        };
        assert!(query.validate().is_none());
    }
}
