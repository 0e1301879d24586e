use super::normalizer::normalize;
use super::types::{Country, LookupError};
use crate::directory::client::DirectoryClient;
use crate::storage::memory::MemoryStore;

/// Orchestrates one resolution per request: validate, check the store, fetch
/// from the directory on a miss, normalize, populate the store, respond.
///
/// Constructed once at startup with its store and directory client, then
/// shared across request handlers behind an `Arc`. Holds no per-request state.
pub struct LookupService {
    store: MemoryStore<Country>,
    directory: DirectoryClient,
}

impl LookupService {
    pub fn new(store: MemoryStore<Country>, directory: DirectoryClient) -> Self {
        Self { store, directory }
    }

    /// Number of memoized records, for the periodic stats report.
    pub fn cached_entries(&self) -> usize {
        self.store.len()
    }

    pub async fn resolve(&self, name: &str) -> Result<Country, LookupError> {
        if name.is_empty() {
            return Err(LookupError::InvalidRequest(
                "name query param is required".to_string(),
            ));
        }

        if let Some(country) = self.store.get(name) {
            tracing::debug!("Cache hit for {:?}", name);
            return Ok(country);
        }

        let candidates = self.directory.search(name).await?;
        let country = normalize(&candidates, name)?;

        // Concurrent misses for the same name race to this point; each write
        // carries an independently fetched but equivalent record, and the
        // last writer wins.
        self.store.set(name, country.clone());
        tracing::debug!("Cached record for {:?}", name);

        Ok(country)
    }
}
