//! Credential pool with a shared round-robin cursor.
//!
//! The key list is fixed at startup. The cursor lives for the life of the
//! process, starts at 0 and is never persisted. Every clone of a `KeyPool`
//! shares the same cursor, so rotation is process-wide.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A key taken from the pool, along with its position in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedKey {
    pub index: usize,
    pub key: String,
}

#[derive(Debug, Clone)]
pub struct KeyPool {
    keys: Arc<[String]>,
    cursor: Arc<AtomicUsize>,
}

impl KeyPool {
    pub fn new(keys: Vec<String>) -> Self {
        Self {
            keys: keys.into(),
            cursor: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the key at the cursor and advances the cursor to
    /// `(cursor + 1) % len`. Returns `None` when the pool is empty.
    ///
    /// Read and advance happen in one atomic update, so concurrent callers
    /// never observe the same index.
    pub fn next_key(&self) -> Option<SelectedKey> {
        let len = self.keys.len();
        if len == 0 {
            return None;
        }

        let index = self
            .cursor
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                Some((current + 1) % len)
            })
            // The closure always returns Some, so this is always Ok.
            .unwrap_or_else(|current| current);

        Some(SelectedKey {
            index,
            key: self.keys[index].clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn pool(keys: &[&str]) -> KeyPool {
        KeyPool::new(keys.iter().map(|k| k.to_string()).collect())
    }

    #[test]
    fn test_empty_pool_yields_nothing() {
        let pool = pool(&[]);
        assert!(pool.is_empty());
        assert_eq!(pool.next_key(), None);
        assert_eq!(pool.next_key(), None);
    }

    #[test]
    fn test_rotation_visits_each_key_in_order_then_wraps() {
        let pool = pool(&["a", "b", "c"]);

        let taken: Vec<String> = (0..4).map(|_| pool.next_key().unwrap().key).collect();
        assert_eq!(taken, vec!["a", "b", "c", "a"]);
    }

    #[test]
    fn test_selected_index_matches_position() {
        let pool = pool(&["a", "b"]);
        assert_eq!(pool.next_key().unwrap().index, 0);
        assert_eq!(pool.next_key().unwrap().index, 1);
        assert_eq!(pool.next_key().unwrap().index, 0);
    }

    #[test]
    fn test_single_key_is_always_reused() {
        let pool = pool(&["solo"]);
        for _ in 0..5 {
            assert_eq!(pool.next_key().unwrap().key, "solo");
        }
    }

    #[test]
    fn test_clones_share_the_cursor() {
        let first = pool(&["a", "b", "c"]);
        let second = first.clone();

        assert_eq!(first.next_key().unwrap().key, "a");
        assert_eq!(second.next_key().unwrap().key, "b");
        assert_eq!(first.next_key().unwrap().key, "c");
    }

    #[test]
    fn test_concurrent_callers_split_keys_evenly() {
        let pool = pool(&["a", "b", "c", "d"]);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let pool = pool.clone();
                std::thread::spawn(move || {
                    (0..100)
                        .map(|_| pool.next_key().unwrap().key)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut counts: HashMap<String, usize> = HashMap::new();
        for handle in handles {
            for key in handle.join().unwrap() {
                *counts.entry(key).or_default() += 1;
            }
        }

        assert_eq!(counts.len(), 4);
        assert!(counts.values().all(|&n| n == 200), "{counts:?}");
    }
}
