//! Lookup Service Module
//!
//! The core component responsible for resolving a country name into one
//! canonical summary record.
//!
//! ## Overview
//! This module bridges the HTTP API layer with the memoization store and the
//! upstream directory boundary. Each inbound request runs the same short
//! protocol: validate the query, consult the store, on a miss fetch from the
//! directory, normalize the raw candidates into a single record, populate the
//! store, and respond.
//!
//! ## Responsibilities
//! - **Validation**: Rejecting empty queries before any store or upstream work.
//! - **Memoization**: Serving repeat queries from the shared store; concurrent
//!   first-time requests for the same name race independently to the upstream
//!   and both write (accepted stampede, no single-flight coalescing).
//! - **Normalization**: Selecting one candidate (exact name match, else first)
//!   and extracting the canonical fields from its uneven payload.
//! - **API**: Exposing the lookup over a RESTful HTTP endpoint.
//!
//! ## Submodules
//! - **`service`**: The per-request resolution flow and its outcome mapping.
//! - **`normalizer`**: Pure candidate selection and field extraction logic.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`protocol`**: Endpoint constants and query DTOs.
//! - **`types`**: The canonical record and the resolution error taxonomy.

pub mod handlers;
pub mod normalizer;
pub mod protocol;
pub mod service;
pub mod types;
