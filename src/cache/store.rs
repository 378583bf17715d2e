//! Cache Store Module
//!
//! Main cache engine combining a fixed prime-length bucket table (chained
//! collision resolution) with a recency queue for LRU eviction. Every live
//! entry appears once in a bucket chain and once in the queue; the queue
//! payload carries the bucket index so eviction never re-hashes the key.

use std::hash::{BuildHasher, Hash};

use ahash::RandomState;
use tracing::{debug, trace};

use crate::cache::entry::{Entry, EntryRef};
use crate::cache::prime::next_prime;
use crate::cache::queue::RecencyQueue;
use crate::cache::stats::CacheStats;
use crate::config::CacheConfig;
use crate::error::Result;

// == LRU Cache ==
/// Fixed-capacity cache evicting the least recently touched entry.
///
/// The bucket table length is chosen at construction (smallest prime at or
/// above capacity / load factor) and never changes; capacity is enforced by
/// eviction rather than growth. All operations are amortized O(1).
pub struct LruCache<K, V, S = RandomState> {
    /// Chain heads, indexed by hash modulo the fixed table length
    buckets: Vec<Option<usize>>,
    /// Arena of live entries; chain links are slot indices into this
    entries: Vec<Option<Entry<K, V>>>,
    /// Reusable arena slots freed by eviction
    free_list: Vec<usize>,
    /// Recency order; the head is always the next eviction victim
    queue: RecencyQueue<EntryRef>,
    /// Lookup counters
    stats: CacheStats,
    /// Maximum number of live entries
    capacity: usize,
    hash_builder: S,
}

impl<K: Hash + Eq, V> LruCache<K, V> {
    // == Constructor ==
    /// Creates a cache with the given capacity and the default load factor.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidConfig` if the capacity is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(CacheConfig::new(capacity))
    }

    /// Creates a cache from explicit construction parameters.
    pub fn with_config(config: CacheConfig) -> Result<Self> {
        Self::with_config_and_hasher(config, RandomState::new())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a cache with a caller-supplied hash builder.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidConfig` if the capacity is zero or the
    /// load factor is not a positive finite number.
    pub fn with_config_and_hasher(config: CacheConfig, hash_builder: S) -> Result<Self> {
        config.validate()?;

        let requested = (config.capacity as f64 / config.load_factor).ceil() as u64;
        let table_len = next_prime(requested.max(1)) as usize;
        debug!(
            "cache table sized: capacity={}, load_factor={}, table_len={}",
            config.capacity, config.load_factor, table_len
        );

        Ok(Self {
            buckets: vec![None; table_len],
            entries: Vec::with_capacity(config.capacity),
            free_list: Vec::new(),
            queue: RecencyQueue::new(),
            stats: CacheStats::new(),
            capacity: config.capacity,
            hash_builder,
        })
    }

    // == Look Up ==
    /// Retrieves the value stored under `key`, promoting it to most
    /// recently used.
    ///
    /// Every call counts as a lookup; a found key additionally counts as a
    /// hit. Returns `None` when the key is absent.
    pub fn look_up(&mut self, key: &K) -> Option<&V> {
        self.stats.record_lookup();

        let hash = self.hash_builder.hash_one(key);
        let index = self.bucket_index(hash);

        let mut cursor = self.buckets[index];
        while let Some(slot) = cursor {
            let entry = match self.entries[slot].as_ref() {
                Some(entry) => entry,
                None => break,
            };
            if entry.matches(hash, key) {
                let handle = entry.handle;
                self.queue.move_to_back(handle);
                self.stats.record_hit();
                return self.entries[slot].as_ref().map(|entry| &entry.value);
            }
            cursor = entry.next;
        }

        None
    }

    // == Store ==
    /// Stores `value` under `key`.
    ///
    /// An existing key has its value overwritten in place and is promoted
    /// to most recently used; this does not count toward the lookup
    /// statistics. A new key is prepended to its bucket chain, and if the
    /// insertion exceeds capacity the least recently used entry anywhere in
    /// the cache is evicted.
    pub fn store(&mut self, key: K, value: V) {
        let hash = self.hash_builder.hash_one(&key);
        let index = self.bucket_index(hash);

        // search the chain first; an existing key is an in-place overwrite
        let mut cursor = self.buckets[index];
        while let Some(slot) = cursor {
            let entry = match self.entries[slot].as_mut() {
                Some(entry) => entry,
                None => break,
            };
            if entry.matches(hash, &key) {
                entry.value = value;
                let handle = entry.handle;
                self.queue.move_to_back(handle);
                return;
            }
            cursor = entry.next;
        }

        // new key: prepend to the chain head and register in the queue
        let slot = self.alloc_slot();
        let handle = self.queue.insert(EntryRef {
            bucket: index,
            slot,
        });
        self.entries[slot] = Some(Entry {
            key,
            value,
            hash,
            handle,
            next: self.buckets[index],
        });
        self.buckets[index] = Some(slot);

        // a single insertion grows occupancy by exactly one, so at most
        // one eviction restores the bound
        if self.queue.len() > self.capacity {
            if let Ok(victim) = self.queue.extract() {
                self.evict(victim);
            }
        }
    }

    // == Statistics Accessors ==
    /// Configured maximum number of entries (not the current occupancy).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of lookups that found their key.
    pub fn hits(&self) -> u64 {
        self.stats.hits
    }

    /// Number of lookups that found nothing.
    pub fn misses(&self) -> u64 {
        self.stats.misses()
    }

    /// Total number of lookups performed.
    pub fn lookups(&self) -> u64 {
        self.stats.lookups
    }

    /// Ratio of hits to lookups; NaN before the first lookup.
    pub fn hit_ratio(&self) -> f64 {
        self.stats.hit_ratio()
    }

    /// Snapshot of all counters.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Current number of live entries. The capacity bound is asserted
    /// against this in tests; there is no public occupancy accessor.
    pub(crate) fn occupancy(&self) -> usize {
        self.queue.len()
    }

    pub(crate) fn table_len(&self) -> usize {
        self.buckets.len()
    }

    // == Internals ==
    fn bucket_index(&self, hash: u64) -> usize {
        (hash % self.buckets.len() as u64) as usize
    }

    /// Reserves an arena slot for a new entry, reusing freed slots first.
    fn alloc_slot(&mut self) -> usize {
        match self.free_list.pop() {
            Some(slot) => slot,
            None => {
                self.entries.push(None);
                self.entries.len() - 1
            }
        }
    }

    /// Removes the extracted victim from its bucket chain and releases its
    /// arena slot. The victim carries its own bucket index, so no key is
    /// re-hashed here.
    fn evict(&mut self, victim: EntryRef) {
        self.unlink_from_chain(victim.bucket, victim.slot);
        self.entries[victim.slot] = None;
        self.free_list.push(victim.slot);
        self.stats.record_eviction();
        trace!("evicted least recently used entry from bucket {}", victim.bucket);
    }

    /// Splices an entry out of its bucket chain.
    ///
    /// The chain is singly linked, so removing an interior entry walks from
    /// the head to find the predecessor; chains stay short under the
    /// configured load factor.
    fn unlink_from_chain(&mut self, bucket: usize, slot: usize) {
        match self.buckets[bucket] {
            Some(head) if head == slot => {
                self.buckets[bucket] = self.chain_next(slot);
            }
            Some(head) => {
                let mut prev = head;
                while let Some(next) = self.chain_next(prev) {
                    if next == slot {
                        let after = self.chain_next(slot);
                        if let Some(entry) = self.entries[prev].as_mut() {
                            entry.next = after;
                        }
                        break;
                    }
                    prev = next;
                }
            }
            None => {}
        }
    }

    fn chain_next(&self, slot: usize) -> Option<usize> {
        self.entries[slot].as_ref().and_then(|entry| entry.next)
    }
}
