//! Default reqwest-backed transport

use crate::error::{Error, Result};
use crate::transport::{Transport, TransportResponse};
use async_trait::async_trait;

const USER_AGENT: &str = "bing-geocoder/0.1.0";

/// Default HTTP transport built on reqwest
///
/// Identifies itself with a crate user-agent. Connection pooling, TLS, and
/// proxy behavior (including environment-driven proxies) come from reqwest's
/// defaults.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a new transport with the default client configuration
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an already-configured reqwest client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

/// Extract the charset parameter from a Content-Type header value
fn charset_of(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .skip(1)
        .map(str::trim)
        .find_map(|param| param.strip_prefix("charset="))
        .map(|cs| cs.trim_matches('"').to_ascii_lowercase())
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse> {
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        let charset = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(charset_of);
        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse {
            status,
            charset,
            body,
        })
    }
}
