use crate::directory::types::DirectoryError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical summary record returned to clients.
///
/// Produced only by the normalizer and immutable from then on; the store and
/// every response hold their own independent copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Country {
    pub name: String,
    pub capital: String,
    pub currency: String,
    pub population: u64,
}

/// Terminal failure outcomes of a resolution.
///
/// The `Display` text of each variant is the plain-text body the API returns
/// for it.
#[derive(Debug, Error, PartialEq)]
pub enum LookupError {
    /// The caller supplied an unusable query; the client must fix it.
    #[error("{0}")]
    InvalidRequest(String),
    /// Valid query, but the directory knows no such country.
    #[error("country not found")]
    NotFound,
    /// The upstream could not be reached or timed out. Safe to retry later,
    /// but never retried here.
    #[error("{0}")]
    UpstreamUnavailable(String),
    /// The upstream violated its contract: undecodable payload or a selected
    /// candidate missing required data.
    #[error("{0}")]
    UpstreamInvalidResponse(String),
}

impl From<DirectoryError> for LookupError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::Unavailable(detail) => Self::UpstreamUnavailable(detail),
            DirectoryError::InvalidPayload(detail) => Self::UpstreamInvalidResponse(detail),
        }
    }
}
