//! Sharded concurrent map keyed by document id.
//!
//! The map is split into `shard_count` shards, each an ordered map behind
//! its own mutex. Every mutation of the value for key `k` happens while
//! holding the lock of shard `k mod shard_count`, so writers on different
//! shards never contend. The parallel ranker uses this as its score
//! accumulator.

use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};

use crate::document::DocumentId;

/// A mutable reference to one entry, holding the shard lock.
///
/// The lock is released when the guard is dropped. Guards on different
/// shards can coexist; holding two guards on the same shard from one thread
/// deadlocks, so callers keep at most one guard alive at a time.
pub struct Access<'a, V> {
    guard: MappedMutexGuard<'a, V>,
}

impl<V> Deref for Access<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        &self.guard
    }
}

impl<V> DerefMut for Access<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        &mut self.guard
    }
}

/// An integer-keyed map sharded across independently locked ordered maps.
///
/// # Examples
///
/// ```
/// use shrike::util::ConcurrentMap;
///
/// let scores: ConcurrentMap<f64> = ConcurrentMap::new(4);
/// *scores.at(7) += 0.5;
/// *scores.at(7) += 0.25;
/// let merged = scores.drain();
/// assert_eq!(merged[&7], 0.75);
/// ```
#[derive(Debug)]
pub struct ConcurrentMap<V> {
    shards: Vec<Mutex<BTreeMap<DocumentId, V>>>,
}

impl<V> ConcurrentMap<V> {
    /// Create a map with `shard_count` shards. A count of zero is clamped
    /// to one.
    pub fn new(shard_count: usize) -> Self {
        let shard_count = shard_count.max(1);
        ConcurrentMap {
            shards: (0..shard_count).map(|_| Mutex::new(BTreeMap::new())).collect(),
        }
    }

    fn shard(&self, key: DocumentId) -> &Mutex<BTreeMap<DocumentId, V>> {
        let index = (key as u64 % self.shards.len() as u64) as usize;
        &self.shards[index]
    }

    /// Lock the shard for `key` and return a guard over its value,
    /// default-constructed if absent.
    pub fn at(&self, key: DocumentId) -> Access<'_, V>
    where
        V: Default,
    {
        let guard = self.shard(key).lock();
        Access {
            guard: MutexGuard::map(guard, |map| map.entry(key).or_default()),
        }
    }

    /// Remove the entry for `key` under the shard lock, if present.
    pub fn erase(&self, key: DocumentId) {
        self.shard(key).lock().remove(&key);
    }

    /// Move every entry into a single ordered map, locking shards in order.
    pub fn drain(&self) -> BTreeMap<DocumentId, V> {
        let mut merged = BTreeMap::new();
        for shard in &self.shards {
            merged.append(&mut shard.lock());
        }
        merged
    }

    /// Total number of entries, summed shard by shard.
    ///
    /// Each shard is locked only for its own size read, so the total may be
    /// stale by the time it is returned.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.lock().len()).sum()
    }

    /// Check whether every shard is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of shards the key space is split across.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }
}
