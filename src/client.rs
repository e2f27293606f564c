//! Geocoder client
//!
//! Ties the pieces together: configuration, dialect selection, request
//! building, one GET through the transport collaborator, and response
//! decoding. Per-request failures never escalate; they come back as empty
//! result sets so callers can treat "no value" as the single failure
//! signal.

use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::request::{legacy_aux_tail, legacy_url, rest_url};
use crate::response;
use crate::transport::{HttpTransport, LoggingTransport, Transport};
use serde_json::Value;
use std::sync::OnceLock;
use tracing::warn;

/// Client for the Bing Maps (Virtual Earth) geocoding APIs
///
/// Construct via [`Geocoder::new`] or [`Geocoder::builder`]. Configuration
/// is immutable after construction except for the transport, which may be
/// swapped with [`Geocoder::set_transport`]. One client may be shared
/// across concurrent calls provided its transport is concurrency-safe.
pub struct Geocoder {
    api_key: Option<String>,
    secure: bool,
    debug: bool,
    transport: Box<dyn Transport>,
    // Static legacy query fragment, identical across calls
    legacy_tail: OnceLock<String>,
}

/// Builder for [`Geocoder`]
#[derive(Default)]
pub struct GeocoderBuilder {
    api_key: Option<String>,
    secure: bool,
    debug: bool,
    transport: Option<Box<dyn Transport>>,
}

impl GeocoderBuilder {
    /// Set the Bing Maps API key, selecting the current REST API
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Use https instead of http (default false)
    ///
    /// Requires a TLS-capable transport; checked at build time.
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Log outgoing requests and incoming responses verbatim (default false)
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Inject a transport collaborator instead of the default reqwest one
    pub fn transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Validate the configuration and build the client
    ///
    /// Fails with [`Error::Config`] if the https scheme was requested but
    /// the transport cannot speak TLS, or if the default transport cannot
    /// be constructed. A missing API key is not fatal: the client warns and
    /// falls back to the deprecated AJAX endpoint.
    pub fn build(self) -> Result<Geocoder> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Box::new(HttpTransport::new()?),
        };

        if self.secure && !transport.supports_tls() {
            return Err(Error::Config(
                "https scheme requested but the transport does not support TLS".to_string(),
            ));
        }

        let transport = if self.debug {
            Box::new(LoggingTransport::new(transport))
        } else {
            transport
        };

        if self.api_key.as_deref().map_or(true, str::is_empty) {
            warn!("No API key configured; using the deprecated AJAX geocode service");
        }

        Ok(Geocoder {
            api_key: self.api_key,
            secure: self.secure,
            debug: self.debug,
            transport,
            legacy_tail: OnceLock::new(),
        })
    }
}

impl Geocoder {
    /// Create a keyless client with the default transport
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Start building a client
    pub fn builder() -> GeocoderBuilder {
        GeocoderBuilder::default()
    }

    /// Which wire protocol this client's calls use
    pub fn dialect(&self) -> Dialect {
        Dialect::for_api_key(self.api_key.as_deref())
    }

    /// Swap the transport collaborator
    ///
    /// Re-checks the TLS requirement and re-applies the debug wrapper.
    pub fn set_transport(&mut self, transport: Box<dyn Transport>) -> Result<()> {
        if self.secure && !transport.supports_tls() {
            return Err(Error::Config(
                "https scheme requested but the transport does not support TLS".to_string(),
            ));
        }
        self.transport = if self.debug {
            Box::new(LoggingTransport::new(transport))
        } else {
            transport
        };
        Ok(())
    }

    fn scheme(&self) -> &'static str {
        if self.secure {
            "https"
        } else {
            "http"
        }
    }

    fn request_url(&self, dialect: Dialect, location: &str) -> String {
        match dialect {
            Dialect::Rest => rest_url(
                self.scheme(),
                self.api_key.as_deref().unwrap_or_default(),
                location,
            ),
            Dialect::Legacy => {
                let tail = self.legacy_tail.get_or_init(legacy_aux_tail);
                legacy_url(self.scheme(), location, tail)
            }
        }
    }

    /// Geocode a location, returning all candidate results
    ///
    /// Results come back in provider order, shaped per the active dialect.
    /// Empty or whitespace-only input short-circuits to an empty result
    /// without touching the network. Transport failures and malformed
    /// payloads also produce an empty result, never an error.
    pub async fn geocode_all(&self, location: &str) -> Vec<Value> {
        if location.trim().is_empty() {
            return Vec::new();
        }

        let dialect = self.dialect();
        let url = self.request_url(dialect, location);

        let response = match self.transport.get(&url).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Geocode request failed: {}", e);
                return Vec::new();
            }
        };

        response::decode(dialect, &response)
    }

    /// Geocode a location, returning the best (first) match if any
    pub async fn geocode_first(&self, location: &str) -> Option<Value> {
        self.geocode_all(location).await.into_iter().next()
    }
}
