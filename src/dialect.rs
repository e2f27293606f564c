//! API dialect selection
//!
//! The provider exposes the same conceptual operation over two wire
//! protocols: the current REST API (keyed) and the deprecated AJAX API
//! (keyless). Which one a call uses depends only on whether an API key is
//! configured.

/// Which wire protocol a geocode call speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Current REST locations API, requires an API key
    Rest,
    /// Deprecated AJAX geocode service, keyless
    Legacy,
}

impl Dialect {
    /// Select the dialect for a given API key
    ///
    /// A present, non-empty key selects the REST API; anything else falls
    /// back to the legacy AJAX service. Stateless per-call decision.
    pub fn for_api_key(api_key: Option<&str>) -> Self {
        match api_key {
            Some(key) if !key.is_empty() => Dialect::Rest,
            _ => Dialect::Legacy,
        }
    }
}
