//! Directory Data Types
//!
//! Defines the decode targets for the upstream directory payload and the
//! failure taxonomy of the directory boundary.
//!
//! The upstream schema is fixed but untrusted: a candidate may carry an empty
//! capital list or no currencies at all, so every optional field defaults
//! rather than failing the decode.

use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Partial upstream directory record for one country.
///
/// Transient: decoded from the candidate array, consumed by the normalizer,
/// then discarded. Only the fields the service actually reads are declared.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCountry {
    pub name: RawCountryName,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub currencies: HashMap<String, RawCurrency>,
}

/// Nested name object; only the common name is relevant.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCountryName {
    pub common: String,
}

/// A single currency entry, keyed upstream by its ISO-ish code.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCurrency {
    #[serde(default)]
    pub symbol: String,
}

/// Failure modes of the upstream boundary.
#[derive(Debug, Error, PartialEq)]
pub enum DirectoryError {
    /// The directory service could not be reached, or the request timed out.
    #[error("{0}")]
    Unavailable(String),
    /// The directory service answered, but the payload does not decode into a
    /// candidate array.
    #[error("{0}")]
    InvalidPayload(String),
}
