//! Transport collaborator abstraction
//!
//! The client never talks HTTP directly; it depends on the minimal
//! capability "perform a GET, report status/charset/body". The default
//! implementation wraps reqwest, and callers may inject their own (test
//! spies, instrumented clients, alternative stacks).

pub mod http;
pub mod logging;

pub use http::HttpTransport;
pub use logging::LoggingTransport;

use crate::error::Result;
use async_trait::async_trait;

/// Raw result of a transport-level GET
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Charset declared in the Content-Type header, if any
    pub charset: Option<String>,
    /// Raw body bytes, undecoded
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Whether the status code is in the 2xx success range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for HTTP transport collaborators
///
/// Implementations must be thread-safe (Send + Sync) so one client can be
/// shared across concurrent geocode calls. Timeout and proxy policy belong
/// to the implementation, not the client.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a single GET against the given URL
    async fn get(&self, url: &str) -> Result<TransportResponse>;

    /// Whether this transport can speak TLS
    ///
    /// Clients configured for the https scheme refuse at construction time
    /// any transport that reports `false` here.
    fn supports_tls(&self) -> bool {
        true
    }
}
