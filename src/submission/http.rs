use crate::submission::traits::PropertyTransport;
use crate::submission::types::{PropertyPayload, SubmitConfig};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, warn};

/// Sends listings to the dashboard's properties API over HTTP
pub struct HttpPropertyTransport {
    client: Client,
    endpoint: Url,
}

impl HttpPropertyTransport {
    /// Create a transport pointed at the default local dashboard
    pub fn new() -> Result<Self> {
        Self::with_config(&SubmitConfig::default())
    }

    /// Create a transport from explicit settings
    pub fn with_config(config: &SubmitConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.endpoint_url()?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PropertyTransport for HttpPropertyTransport {
    async fn post_property(&self, payload: &PropertyPayload) -> Result<StatusCode> {
        debug!("POST {}", self.endpoint);

        // .json() also sets Content-Type: application/json
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .context("Failed to reach properties API")?;

        let status = response.status();
        if !status.is_success() {
            warn!("Properties API returned status: {}", status);
        }

        Ok(status)
    }

    fn transport_name(&self) -> &'static str {
        "http"
    }
}
