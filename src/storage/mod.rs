//! In-Memory Storage Module
//!
//! Implements the concurrent key-value store that memoizes resolved records.
//!
//! ## Core Concepts
//! - **Sharded locking**: Entries live in a `DashMap`, so readers proceed in
//!   parallel and a writer only excludes other access to its own shard for the
//!   duration of a single update. There is no global request-serializing lock.
//! - **Clone-out access**: `get` hands each caller an independent clone of the
//!   stored value, never a reference that aliases shared state.
//! - **Process lifetime**: Entries are created on first write and survive until
//!   teardown. There is no eviction, expiry, capacity bound, or deletion.

pub mod memory;

#[cfg(test)]
mod tests;
