//! Lookup API Protocol
//!
//! Defines the public HTTP endpoint and the query Data Transfer Object of the
//! lookup API. The response body on success is a [`Country`] serialized as
//! JSON; every failure carries a plain-text body instead.
//!
//! [`Country`]: super::types::Country

use serde::Deserialize;

// --- API Endpoints ---

/// Public endpoint for country resolution requests.
pub const ENDPOINT_COUNTRY_SEARCH: &str = "/api/countries/search";

// --- Data Transfer Objects ---

/// Query parameters of the search endpoint.
///
/// A request without the `name` parameter deserializes to an empty string, so
/// the missing and empty cases share the one validation path.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub name: String,
}
