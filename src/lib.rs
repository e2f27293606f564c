//! bing-geocoder: Bing Maps (Virtual Earth) geocoding client
//!
//! A small client library that turns an address string into geographic
//! location candidates by calling the Bing Maps geocoding web API and
//! parsing its JSON response.
//!
//! ## Features
//!
//! - Dual-dialect support: the current REST API (with an API key) and the
//!   deprecated AJAX service (keyless fallback)
//! - Injectable transport collaborator with an optional debug wire log
//! - Lenient decoding: transport failures and malformed payloads come back
//!   as empty result sets, never panics or errors
//!
//! ## Quick Start
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> bing_geocoder::Result<()> {
//! use bing_geocoder::Geocoder;
//!
//! let geocoder = Geocoder::builder()
//!     .api_key("your-bing-maps-key")
//!     .secure(true)
//!     .build()?;
//!
//! // Best match only
//! if let Some(best) = geocoder.geocode_first("Hollywood and Highland, Los Angeles, CA").await {
//!     println!("{}", best["address"]["formattedAddress"]);
//! }
//!
//! // All candidates, in provider order
//! let all = geocoder.geocode_all("Springfield").await;
//! println!("{} candidates", all.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod constants;
pub mod dialect;
pub mod error;
pub mod request;
pub mod response;
pub mod transport;

// Re-export commonly used types
pub use client::{Geocoder, GeocoderBuilder};
pub use dialect::Dialect;
pub use error::{Error, Result};
pub use transport::{HttpTransport, LoggingTransport, Transport, TransportResponse};
