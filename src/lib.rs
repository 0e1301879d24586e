//! Country Lookup Service Library
//!
//! This library crate defines the core modules that make up the lookup service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of three loosely coupled subsystems:
//!
//! - **`directory`**: The upstream boundary. Wraps the remote country directory
//!   API behind a small HTTP client and decodes its heterogeneous payloads.
//! - **`lookup`**: The request-handling core. Validates queries, consults the
//!   store, falls back to the directory on a miss, normalizes the raw
//!   candidates into one canonical record, and exposes the HTTP API.
//! - **`storage`**: The memoization layer. A concurrent in-memory key-value
//!   store (`MemoryStore`) shared by all inbound requests for the lifetime of
//!   the process.

pub mod directory;
pub mod lookup;
pub mod storage;
