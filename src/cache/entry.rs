//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and the payload the
//! recency queue carries for each of them.

use crate::cache::queue::QueueHandle;

// == Cache Entry ==
/// A single live key/value pair.
///
/// An entry is owned by its bucket chain (either as the chain head or by
/// the previous entry's `next` link) and holds a non-owning handle to its
/// node in the recency queue.
pub(crate) struct Entry<K, V> {
    /// The key
    pub(crate) key: K,
    /// The stored value
    pub(crate) value: V,
    /// Cached hash of the key, so it is never recomputed
    pub(crate) hash: u64,
    /// Position of this entry in the recency queue; refreshed on promotion
    pub(crate) handle: QueueHandle,
    /// Arena slot of the next entry in the same bucket chain
    pub(crate) next: Option<usize>,
}

impl<K: Eq, V> Entry<K, V> {
    /// Compares a candidate key against this entry.
    ///
    /// The cached hash is compared first to short-circuit most mismatches
    /// before the (potentially expensive) key equality check.
    pub(crate) fn matches(&self, hash: u64, key: &K) -> bool {
        self.hash == hash && self.key == *key
    }
}

// == Entry Ref ==
/// Queue payload identifying a live entry.
///
/// Carries the bucket index alongside the entry's arena slot so that
/// eviction can unlink the entry from its chain without re-hashing the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EntryRef {
    /// Index of the bucket whose chain holds the entry
    pub(crate) bucket: usize,
    /// Arena slot of the entry itself
    pub(crate) slot: usize,
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::queue::RecencyQueue;

    fn entry(key: &'static str, hash: u64) -> Entry<&'static str, i32> {
        Entry {
            key,
            value: 0,
            hash,
            handle: RecencyQueue::new().insert(0u8),
            next: None,
        }
    }

    #[test]
    fn test_matches_same_hash_and_key() {
        let e = entry("alpha", 42);
        assert!(e.matches(42, &"alpha"));
    }

    #[test]
    fn test_matches_rejects_different_hash() {
        let e = entry("alpha", 42);
        assert!(!e.matches(43, &"alpha"));
    }

    #[test]
    fn test_matches_rejects_hash_collision_with_different_key() {
        // same hash, different key: the equality check must still reject
        let e = entry("alpha", 42);
        assert!(!e.matches(42, &"beta"));
    }
}
