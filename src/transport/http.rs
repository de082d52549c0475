use std::time::Duration;

use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;

use crate::protocol::Response;
use crate::transport::Transport;

/// Default timeout for a request round trip (30 seconds).
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// JSON-over-HTTP transport backed by a blocking reqwest client.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post(&mut self, url: &str, body: &Value) -> anyhow::Result<Response> {
        let reply = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .with_context(|| format!("POST {} failed", url))?;
        let status = reply.status();
        log::debug!("POST {} -> {}", url, status);
        reply
            .json::<Response>()
            .with_context(|| format!("reply from {} ({}) is not a JSON object", url, status))
    }
}
