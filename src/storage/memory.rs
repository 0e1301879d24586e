use dashmap::DashMap;

/// Concurrent in-memory key-value store, generic over the stored value.
///
/// Keys are opaque strings and are stored exactly as supplied (case-sensitive,
/// untrimmed). All operations are total: `get` on an unknown key is a plain
/// miss, `set` always succeeds, and neither reports an error.
pub struct MemoryStore<V> {
    data: DashMap<String, V>,
}

impl<V: Clone> MemoryStore<V> {
    pub fn new() -> Self {
        Self {
            data: DashMap::new(),
        }
    }

    /// Returns a clone of the value stored under `key`, or `None` if the key
    /// was never set.
    pub fn get(&self, key: &str) -> Option<V> {
        self.data.get(key).map(|entry| entry.value().clone())
    }

    /// Inserts or overwrites the mapping for `key`. Does not signal whether a
    /// prior value existed.
    pub fn set(&self, key: impl Into<String>, value: V) {
        self.data.insert(key.into(), value);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<V: Clone> Default for MemoryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}
