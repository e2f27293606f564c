//! Debug-mode transport decorator
//!
//! Wraps another transport and logs each outgoing request and incoming
//! response verbatim at debug level. Enabled by the client's debug flag.

use crate::error::Result;
use crate::transport::{Transport, TransportResponse};
use async_trait::async_trait;
use tracing::debug;

/// Transport wrapper that logs the wire traffic it forwards
pub struct LoggingTransport {
    inner: Box<dyn Transport>,
}

impl LoggingTransport {
    /// Wrap a transport in request/response logging
    pub fn new(inner: Box<dyn Transport>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Transport for LoggingTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse> {
        debug!(%url, "GET");
        let response = self.inner.get(url).await?;
        debug!(
            status = response.status,
            charset = response.charset.as_deref(),
            body = %String::from_utf8_lossy(&response.body),
            "response"
        );
        Ok(response)
    }

    fn supports_tls(&self) -> bool {
        self.inner.supports_tls()
    }
}
