//! Country Directory Module
//!
//! Handles all communication with the upstream country directory service.
//!
//! ## Workflow
//! 1. **Request**: Issues one GET per lookup to `/v3.1/name/<urlencoded-name>`
//!    with a fixed 5 second timeout. There are no retries.
//! 2. **Decode**: Parses the JSON candidate array into `RawCountry` records,
//!    tolerating structurally incomplete entries (missing capitals,
//!    missing currencies).
//! 3. **Classify**: Maps transport failures and undecodable payloads onto the
//!    two `DirectoryError` variants for the lookup layer to act on.

pub mod client;
pub mod types;
