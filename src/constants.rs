//! Centralized constants for the bing-geocoder crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// External API endpoints
pub mod api {
    /// Host serving both geocoding API generations
    pub const VIRTUAL_EARTH_HOST: &str = "dev.virtualearth.net";

    /// Current REST locations endpoint (requires an API key)
    pub const REST_LOCATIONS_PATH: &str = "/REST/v1/Locations";

    /// Deprecated AJAX geocode endpoint (keyless)
    pub const LEGACY_GEOCODE_PATH: &str =
        "/services/v1/geocodeservice/geocodeservice.asmx/Geocode";
}

/// Legacy (AJAX) dialect parameters
pub mod legacy {
    /// Auxiliary query parameters the legacy service requires to be present
    /// but empty. Omitting any of them breaks compatibility with the
    /// service, so the full set is always sent.
    pub const AUX_PARAMS: [&str; 15] = [
        "addressLine",
        "adminDistrict",
        "count",
        "countryRegion",
        "culture",
        "curLocAccuracy",
        "currentLocation",
        "district",
        "entityTypes",
        "landmark",
        "locality",
        "mapBounds",
        "postalCode",
        "postalTown",
        "rankBy",
    ];
}
