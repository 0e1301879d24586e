//! Storage Module Tests
//!
//! Validates the local storage mechanics and the concurrency contract of the
//! memoization store.
//!
//! ## Test Scopes
//! - **Basics**: Set/Get round trips, misses, overwrites, key sensitivity.
//! - **Concurrency**: Parallel readers and writers across keys, and competing
//!   writers on a single key.

#[cfg(test)]
mod tests {
    use crate::storage::memory::MemoryStore;
    use std::sync::Arc;

    // Test data structure
    #[derive(Debug, Clone, PartialEq)]
    struct TestRecord {
        name: String,
        capital: String,
    }

    // ============================================================
    // BASIC OPERATIONS
    // ============================================================

    #[test]
    fn test_set_then_get_returns_value() {
        let store: MemoryStore<TestRecord> = MemoryStore::new();

        let record = TestRecord {
            name: "India".to_string(),
            capital: "New Delhi".to_string(),
        };

        store.set("India", record.clone());

        let retrieved = store.get("India");
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap(), record);
    }

    #[test]
    fn test_get_missing_key_returns_none() {
        let store: MemoryStore<TestRecord> = MemoryStore::new();

        let result = store.get("nonexistent");
        assert!(result.is_none());
    }

    #[test]
    fn test_set_overwrites_existing_value() {
        let store: MemoryStore<TestRecord> = MemoryStore::new();

        let first = TestRecord {
            name: "India".to_string(),
            capital: "Calcutta".to_string(),
        };
        let second = TestRecord {
            name: "India".to_string(),
            capital: "New Delhi".to_string(),
        };

        store.set("India", first);
        store.set("India", second.clone());

        let retrieved = store.get("India");
        assert_eq!(retrieved.unwrap().capital, "New Delhi");
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let store: MemoryStore<String> = MemoryStore::new();

        store.set("India", "record".to_string());

        assert!(store.get("India").is_some());
        assert!(
            store.get("india").is_none(),
            "Keys must be matched exactly, not case-folded"
        );
    }

    #[test]
    fn test_multiple_keys() {
        let store: MemoryStore<String> = MemoryStore::new();

        for i in 0..100 {
            let key = format!("country-{:03}", i);
            store.set(key, format!("record {}", i));
        }

        for i in 0..100 {
            let key = format!("country-{:03}", i);
            let retrieved = store.get(&key);
            assert!(retrieved.is_some(), "Entry {} should exist", key);
            assert_eq!(retrieved.unwrap(), format!("record {}", i));
        }
    }

    #[test]
    fn test_len_tracks_entries() {
        let store: MemoryStore<String> = MemoryStore::new();
        assert!(store.is_empty());

        store.set("a", "1".to_string());
        store.set("b", "2".to_string());
        store.set("a", "3".to_string());

        assert_eq!(store.len(), 2, "Overwrites must not add entries");
    }

    // ============================================================
    // CONCURRENCY
    // ============================================================

    #[test]
    fn test_concurrent_set_get_across_keys() {
        let store: Arc<MemoryStore<String>> = Arc::new(MemoryStore::new());

        let mut handles = Vec::new();
        for worker in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                for i in 0..100 {
                    let key = format!("worker-{}-key-{}", worker, i);
                    let value = format!("value-{}-{}", worker, i);
                    store.set(key.clone(), value.clone());

                    // A write must be visible to its own reader immediately,
                    // regardless of what the other workers are doing.
                    assert_eq!(store.get(&key), Some(value));
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 800, "Every worker's writes should be retained");
    }

    #[test]
    fn test_concurrent_writers_same_key() {
        let store: Arc<MemoryStore<String>> = Arc::new(MemoryStore::new());

        let mut handles = Vec::new();
        for worker in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                store.set("contested", format!("value-{}", worker));
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        // Last writer wins; which one is unspecified, but the entry must hold
        // exactly one of the written values.
        let retrieved = store.get("contested").expect("Entry should exist");
        let valid: Vec<String> = (0..8).map(|w| format!("value-{}", w)).collect();
        assert!(
            valid.contains(&retrieved),
            "Stored value {:?} should be one of the written values",
            retrieved
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_stable_while_other_keys_churn() {
        let store: Arc<MemoryStore<TestRecord>> = Arc::new(MemoryStore::new());

        let pinned = TestRecord {
            name: "India".to_string(),
            capital: "New Delhi".to_string(),
        };
        store.set("India", pinned.clone());

        let churn_store = Arc::clone(&store);
        let churner = std::thread::spawn(move || {
            for i in 0..1000 {
                churn_store.set(
                    format!("noise-{}", i % 50),
                    TestRecord {
                        name: format!("noise-{}", i),
                        capital: "somewhere".to_string(),
                    },
                );
            }
        });

        // Once present, the entry must keep returning the same value no matter
        // how much write traffic lands on other keys.
        for _ in 0..1000 {
            assert_eq!(store.get("India"), Some(pinned.clone()));
        }

        churner.join().unwrap();
    }
}
