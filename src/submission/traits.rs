use crate::submission::types::PropertyPayload;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;

/// Delivers a listing to the properties API
/// Lets the workflow run against reqwest in production and a recorder in tests
#[async_trait]
pub trait PropertyTransport: Send + Sync {
    /// Send one payload and report the HTTP status.
    /// `Err` means the request never completed.
    async fn post_property(&self, payload: &PropertyPayload) -> Result<StatusCode>;

    /// Get the name of the transport
    fn transport_name(&self) -> &'static str;
}
