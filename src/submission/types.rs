use crate::models::{FormSnapshot, UserId};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Where and how listings are submitted
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitConfig {
    /// Dashboard origin, e.g. `http://localhost:3000`
    pub base_url: String,
    /// Path of the properties endpoint
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Honour `HTTP_PROXY` and friends
    pub use_system_proxy: bool,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            endpoint: "/api/properties".to_string(),
            timeout_secs: 30,
            user_agent: concat!("listing-desk/", env!("CARGO_PKG_VERSION")).to_string(),
            use_system_proxy: true,
        }
    }
}

impl SubmitConfig {
    pub fn endpoint_url(&self) -> Result<reqwest::Url> {
        let base = reqwest::Url::parse(&self.base_url)
            .with_context(|| format!("Invalid base URL '{}'", self.base_url))?;

        base.join(&self.endpoint)
            .with_context(|| format!("Invalid endpoint '{}'", self.endpoint))
    }
}

/// Body of `POST /api/properties`: the owner plus the snapshot as-is.
///
/// Every key appears once. Snapshot keys are written after `user_id` and
/// replace it on collision.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PropertyPayload(Map<String, Value>);

impl PropertyPayload {
    pub fn new(user_id: &UserId, listing: &FormSnapshot) -> serde_json::Result<Self> {
        let mut body = Map::new();
        body.insert("user_id".to_string(), serde_json::to_value(user_id)?);

        if let Value::Object(fields) = serde_json::to_value(listing)? {
            for (key, value) in fields {
                body.insert(key, value);
            }
        }

        Ok(Self(body))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_endpoint_url() {
        let url = SubmitConfig::default().endpoint_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/properties");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: SubmitConfig =
            serde_json::from_value(json!({ "base_url": "https://dash.example.com" })).unwrap();

        assert_eq!(config.endpoint, "/api/properties");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(
            config.endpoint_url().unwrap().as_str(),
            "https://dash.example.com/api/properties"
        );
    }

    #[test]
    fn test_invalid_base_url_is_an_error() {
        let config = SubmitConfig {
            base_url: "not a url".to_string(),
            ..SubmitConfig::default()
        };
        assert!(config.endpoint_url().is_err());
    }

    #[test]
    fn test_payload_merges_user_id_without_coercion() {
        let mut listing = FormSnapshot::default();
        listing.price = "250000".to_string();
        listing.amenities.insert("pool".to_string(), true);
        let user_id = UserId::from("u1");

        let body = serde_json::to_value(PropertyPayload::new(&user_id, &listing).unwrap()).unwrap();

        assert_eq!(body["user_id"], "u1");
        assert_eq!(body["price"], "250000");
        assert_eq!(body["bedrooms"], "0");
        assert_eq!(body["amenities"], json!({ "pool": true }));
        assert_eq!(body.as_object().unwrap().len(), 20);
    }

    #[test]
    fn test_payload_writes_each_key_once() {
        let mut listing = FormSnapshot::default();
        listing.extra.insert("user_id".to_string(), "forged".to_string());
        listing.extra.insert("amenities".to_string(), "x".to_string());
        listing.amenities.insert("pool".to_string(), true);

        let payload = PropertyPayload::new(&UserId::from("u1"), &listing).unwrap();
        let raw = serde_json::to_string(&payload).unwrap();

        assert_eq!(raw.matches("\"user_id\"").count(), 1);
        assert_eq!(raw.matches("\"amenities\"").count(), 1);
        assert_eq!(payload.get("user_id"), Some(&json!("forged")));
        assert_eq!(payload.get("amenities"), Some(&json!({ "pool": true })));
        assert_eq!(payload.len(), 20);
    }
}
