//! The Robin Hood hash table core.
//!
//! [`Table`] owns one storage generation at a time plus the strategy objects
//! injected at construction (hasher, comparator, probe sequence, optional
//! release hooks), and drives a single probe engine that is generic over the
//! storage layout and the deletion policy.
//!
//! The engine's discipline under the default [`BackwardShift`] policy:
//!
//! - **Insert** walks the probe sequence and lets a candidate that has
//!   probed further steal the slot of an occupant that probed less; the
//!   evicted occupant continues the walk as the new candidate.
//! - **Search** stops early as soon as it sees an occupant whose PSL is
//!   smaller than the current attempt: Robin Hood ordering guarantees the
//!   key cannot appear later.
//! - **Remove** vacates the slot and then shifts every displaced successor
//!   one step back toward its ideal slot, so no tombstone ever exists.
//!
//! Under [`TombstoneMark`] removal leaves a reusable marker instead, search
//! skips markers without pruning, and insert revives the first marker it
//! passes. Growth purges markers because only live entries are rehashed.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::marker::PhantomData;
use core::mem;

use crate::hasher::Fnv1a;
use crate::hasher::KeyHasher;
use crate::probe::Linear;
use crate::probe::ProbeSequence;
use crate::storage::Grouped;
use crate::storage::Slot;
use crate::storage::SlotMeta;
use crate::storage::SlotRef;
use crate::storage::Storage;

/// Capacity of a freshly created table, and the floor below which shrinking
/// never goes. Must be a power of two.
const INITIAL_CAPACITY: usize = 2;

/// Default maximum load factor before the table grows.
const DEFAULT_LOAD_FACTOR: f64 = 0.5;

/// Default minimum load factor before the table shrinks.
const DEFAULT_MIN_LOAD_FACTOR: f64 = 0.25;

/// The closed set of failure outcomes for table operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A zero-length key, or a load-factor configuration outside the valid
    /// ranges (`0 < load_factor <= 1`, `0 <= min_load_factor < load_factor`).
    InvalidArgument,
    /// Insert was given a key the table already holds.
    KeyExists,
    /// Search or remove missed.
    NotFound,
    /// An allocation failed while creating the table or resizing it. After a
    /// failed resize the table is left exactly as it was.
    OutOfMemory,
    /// The probe sequence was exhausted without finding a slot. Unreachable
    /// with a bijective probe and an intact grow trigger, but reported
    /// rather than treated as undefined.
    ProbesExhausted,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let message = match self {
            Error::InvalidArgument => "invalid argument",
            Error::KeyExists => "key already present",
            Error::NotFound => "key not found",
            Error::OutOfMemory => "allocation failed",
            Error::ProbesExhausted => "probe sequence exhausted without finding a slot",
        };
        f.write_str(message)
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "std")] {
        impl std::error::Error for Error {}
    }
}

/// Key equality, decoupled from the key's `Eq` so callers can compare only
/// the semantically relevant bytes (case folding, prefixes, ...).
///
/// Must be consistent with the configured [`KeyHasher`]: keys that compare
/// equal must produce equal digests.
pub trait KeyComparator<K> {
    /// Returns `true` if `a` and `b` are the same key.
    fn eq(&self, a: &K, b: &K) -> bool;
}

/// The default comparator: plain byte equality of the two keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteEq;

impl<K: AsRef<[u8]>> KeyComparator<K> for ByteEq {
    fn eq(&self, a: &K, b: &K) -> bool {
        a.as_ref() == b.as_ref()
    }
}

/// A release hook for keys or values the table owns.
///
/// If a releaser is configured, the table owns every key (or value) passed
/// to [`Table::insert`] and releases each exactly once: on [`Table::remove`]
/// or when the table is dropped. Entries migrated by a resize are not
/// released; they move to the new generation untouched. Without a releaser
/// the resource is simply dropped, which for ordinary Rust types is the
/// same thing; hooks exist for resources whose teardown is external to
/// `Drop` (pool returns, arena bookkeeping, instrumentation).
pub trait Releaser<T> {
    /// Consumes and releases one resource.
    fn release(&self, resource: T);
}

/// How removal vacates a slot. See [`BackwardShift`] and [`TombstoneMark`].
pub trait DeletionPolicy {
    /// Whether removal leaves a reusable marker in the slot instead of
    /// vacating it and shifting the displaced chain back.
    ///
    /// Marker-based removal disables Robin Hood displacement on insert and
    /// PSL pruning on search: both are only sound when deletion keeps the
    /// displacement ordering intact.
    const LEAVES_MARKERS: bool;
}

/// Backward-shift deletion, the default policy.
///
/// Removal pulls every displaced successor one slot closer to its ideal
/// position, so the table never accumulates deletion debris and search can
/// prune on PSL. Requires a probe sequence whose step between attempts does
/// not depend on the digest (linear probing).
#[derive(Debug, Clone, Copy, Default)]
pub struct BackwardShift;

impl DeletionPolicy for BackwardShift {
    const LEAVES_MARKERS: bool = false;
}

/// Tombstone deletion.
///
/// Removal marks the slot deleted; probes walk over markers and insert
/// revives the first one it passes. Markers count against the grow trigger
/// and are purged by the next resize. Pairs with any bijective probe
/// sequence, including quadratic and double hashing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TombstoneMark;

impl DeletionPolicy for TombstoneMark {
    const LEAVES_MARKERS: bool = true;
}

/// Construction-time configuration for a [`Table`].
///
/// `Default` gives the built-in strategies (FNV-1a hashing, byte equality,
/// linear probing), no release hooks, and load factors 0.5 / 0.25.
pub struct Config<K, V> {
    /// Maximum fill ratio before an insert grows the table. Must be in
    /// `(0, 1]`.
    pub load_factor: f64,
    /// Minimum fill ratio below which a remove shrinks the table. Must be in
    /// `[0, load_factor)`; zero disables shrinking.
    pub min_load_factor: f64,
    /// Digest function over key bytes; FNV-1a if absent.
    pub hasher: Option<Box<dyn KeyHasher>>,
    /// Key equality; byte equality if absent.
    pub comparator: Option<Box<dyn KeyComparator<K>>>,
    /// Probe sequence; linear probing if absent.
    pub probe: Option<Box<dyn ProbeSequence>>,
    /// Release hook for keys. Supplying one makes the table the owner of
    /// every inserted key.
    pub key_release: Option<Box<dyn Releaser<K>>>,
    /// Release hook for values. Supplying one makes the table the owner of
    /// every inserted value.
    pub value_release: Option<Box<dyn Releaser<V>>>,
}

impl<K, V> Default for Config<K, V> {
    fn default() -> Self {
        Config {
            load_factor: DEFAULT_LOAD_FACTOR,
            min_load_factor: DEFAULT_MIN_LOAD_FACTOR,
            hasher: None,
            comparator: None,
            probe: None,
            key_release: None,
            value_release: None,
        }
    }
}

/// An open-addressing hash table over byte-sequence keys.
///
/// `Table<K, V, L, D>` stores keys `K: AsRef<[u8]>` and opaque values `V` in
/// a storage layout `L` (default [`Grouped`], alternatively
/// [`crate::storage::Columnar`]) under a deletion policy `D` (default
/// [`BackwardShift`]). Capacity is always a power of two, starting at 2,
/// doubling when an insert would exceed the configured load factor and
/// halving when a remove drops the fill ratio below the minimum.
///
/// Duplicate keys are rejected: this table stores a key at most once and
/// never overwrites on insert.
///
/// A table is single-threaded by design and performs no internal
/// synchronization.
///
/// # Examples
///
/// ```rust
/// use shift_hash::Table;
///
/// let mut table: Table<Vec<u8>, &str> = Table::new().unwrap();
/// table.insert(b"one".to_vec(), "1").unwrap();
///
/// assert_eq!(table.search(&b"one".to_vec()), Some(&"1"));
/// assert!(table.search(&b"two".to_vec()).is_none());
/// ```
pub struct Table<K, V, L = Grouped<K, V>, D = BackwardShift>
where
    L: Storage<K, V>,
{
    storage: L,
    active: usize,
    /// Slots that are not vacant: active entries plus tombstone markers.
    /// Equal to `active` under the backward-shift policy.
    used: usize,
    load_factor: f64,
    min_load_factor: f64,
    hasher: Box<dyn KeyHasher>,
    comparator: Box<dyn KeyComparator<K>>,
    probe: Box<dyn ProbeSequence>,
    key_release: Option<Box<dyn Releaser<K>>>,
    value_release: Option<Box<dyn Releaser<V>>>,
    _policy: PhantomData<D>,
}

impl<K, V, L, D> Table<K, V, L, D>
where
    K: AsRef<[u8]>,
    L: Storage<K, V>,
    D: DeletionPolicy,
{
    /// Creates a table with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if the initial allocation fails.
    pub fn new() -> Result<Self, Error> {
        Self::with_config(Config::default())
    }

    /// Creates a table from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the load factors are out of
    /// range, or [`Error::OutOfMemory`] if the initial allocation fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shift_hash::{Config, Error, Table};
    ///
    /// let bad = Config::<Vec<u8>, u32> {
    ///     load_factor: 1.5,
    ///     ..Config::default()
    /// };
    /// assert_eq!(
    ///     Table::<Vec<u8>, u32>::with_config(bad).err(),
    ///     Some(Error::InvalidArgument)
    /// );
    /// ```
    pub fn with_config(config: Config<K, V>) -> Result<Self, Error> {
        if !(config.load_factor > 0.0 && config.load_factor <= 1.0) {
            return Err(Error::InvalidArgument);
        }
        if !(config.min_load_factor >= 0.0 && config.min_load_factor < config.load_factor) {
            return Err(Error::InvalidArgument);
        }

        Ok(Table {
            storage: L::create(INITIAL_CAPACITY)?,
            active: 0,
            used: 0,
            load_factor: config.load_factor,
            min_load_factor: config.min_load_factor,
            hasher: config.hasher.unwrap_or_else(|| Box::new(Fnv1a)),
            comparator: config.comparator.unwrap_or_else(|| Box::new(ByteEq)),
            probe: config.probe.unwrap_or_else(|| Box::new(Linear)),
            key_release: config.key_release,
            value_release: config.value_release,
            _policy: PhantomData,
        })
    }

    /// Returns a reference to the value stored for `key`, or `None` if the
    /// key is absent.
    pub fn search(&self, key: &K) -> Option<&V> {
        if key.as_ref().is_empty() {
            return None;
        }
        let digest = self.hasher.digest(key.as_ref());
        let (index, _) = self.locate(digest, key)?;
        match self.storage.get(index) {
            SlotRef::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn search_mut(&mut self, key: &K) -> Option<&mut V> {
        if key.as_ref().is_empty() {
            return None;
        }
        let digest = self.hasher.digest(key.as_ref());
        let (index, _) = self.locate(digest, key)?;
        self.storage.value_mut(index)
    }

    /// Inserts a key/value pair.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] for a zero-length key.
    /// - [`Error::KeyExists`] if the key is already stored.
    /// - [`Error::OutOfMemory`] if a required growth rehash cannot allocate;
    ///   the table is unchanged.
    /// - [`Error::ProbesExhausted`] if no free slot is reachable (defensive;
    ///   unreachable with a bijective probe).
    ///
    /// On any error the rejected key and value are dropped without invoking
    /// the release hooks: the table never owned them.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), Error> {
        if key.as_ref().is_empty() {
            return Err(Error::InvalidArgument);
        }
        let digest = self.hasher.digest(key.as_ref());
        if self.locate(digest, &key).is_some() {
            return Err(Error::KeyExists);
        }
        self.grow_if_needed()?;
        self.insert_slot(Slot {
            digest,
            psl: 0,
            key,
            value,
        })
    }

    /// Removes `key`, releasing its key and value through the configured
    /// hooks.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] for a zero-length key.
    /// - [`Error::NotFound`] if the key is absent.
    /// - [`Error::OutOfMemory`] if a shrink rehash cannot allocate. The
    ///   entry is still removed and the table is valid; it merely keeps its
    ///   larger capacity.
    pub fn remove(&mut self, key: &K) -> Result<(), Error> {
        if key.as_ref().is_empty() {
            return Err(Error::InvalidArgument);
        }
        let digest = self.hasher.digest(key.as_ref());
        let (index, attempt) = self.locate(digest, key).ok_or(Error::NotFound)?;

        let removed = if D::LEAVES_MARKERS {
            self.storage.mark_deleted(index)
        } else {
            let removed = self.storage.clear(index);
            self.shift_backward(digest, index, attempt);
            removed
        };
        if let Some(slot) = removed {
            self.release(slot);
        }

        self.active -= 1;
        if !D::LEAVES_MARKERS {
            self.used -= 1;
        }
        self.shrink_if_needed()
    }

    /// The number of live entries.
    pub fn len(&self) -> usize {
        self.active
    }

    /// Returns `true` if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    /// The current slot-array capacity. Always a power of two.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Calls `visitor` for every entry, in slot order.
    ///
    /// Slot order is an artifact of hashing and resizing; no other ordering
    /// is guaranteed.
    pub fn for_each(&self, mut visitor: impl FnMut(&K, &V)) {
        for (key, value) in self.iter() {
            visitor(key, value);
        }
    }

    /// Returns an iterator over the entries in slot order.
    pub fn iter(&self) -> Iter<'_, K, V, L> {
        Iter {
            storage: &self.storage,
            index: 0,
            _marker: PhantomData,
        }
    }

    /// Computes the probe-length distribution of the live entries.
    pub fn probe_stats(&self) -> ProbeStats {
        let capacity = self.storage.capacity();
        let mut max_psl = 0u32;
        let mut total: u64 = 0;
        let mut histogram = Vec::new();
        for index in 0..capacity {
            if let SlotMeta::Occupied { psl, .. } = self.storage.meta(index) {
                max_psl = max_psl.max(psl);
                total += u64::from(psl);
                let bucket = psl as usize;
                if histogram.len() <= bucket {
                    histogram.resize(bucket + 1, 0);
                }
                histogram[bucket] += 1;
            }
        }
        ProbeStats {
            active: self.active,
            capacity,
            max_psl,
            average_psl: if self.active == 0 {
                0.0
            } else {
                total as f64 / self.active as f64
            },
            histogram,
        }
    }

    /// Walks the probe sequence of `digest` looking for `key`.
    ///
    /// Returns the slot index and the attempt at which the key was found.
    /// An empty slot ends the walk; under the backward-shift policy an
    /// occupant with a PSL below the current attempt does too, because a
    /// matching entry would have displaced it.
    fn locate(&self, digest: u32, key: &K) -> Option<(usize, usize)> {
        let capacity = self.storage.capacity();
        for attempt in 0..capacity {
            let index = self.probe.probe(digest, attempt, capacity);
            match self.storage.meta(index) {
                SlotMeta::Vacant => return None,
                SlotMeta::Deleted => {}
                SlotMeta::Occupied { digest: found, psl } => {
                    if found == digest {
                        if let SlotRef::Occupied { key: stored, .. } = self.storage.get(index) {
                            if self.comparator.eq(stored, key) {
                                return Some((index, attempt));
                            }
                        }
                    }
                    if !D::LEAVES_MARKERS && (psl as usize) < attempt {
                        return None;
                    }
                }
            }
        }
        None
    }

    /// Places a candidate entry, displacing richer occupants on the way.
    ///
    /// The caller has already ruled out duplicates and applied the grow
    /// trigger. The walk follows the candidate's digest; an evicted
    /// occupant continues the same walk with its own PSL advancing, which
    /// keeps displacement bookkeeping exact for step-invariant probes.
    fn insert_slot(&mut self, mut candidate: Slot<K, V>) -> Result<(), Error> {
        let capacity = self.storage.capacity();
        let walk = candidate.digest;
        for attempt in 0..capacity {
            let index = self.probe.probe(walk, attempt, capacity);
            match self.storage.meta(index) {
                SlotMeta::Vacant => {
                    self.storage.place(index, candidate);
                    self.active += 1;
                    self.used += 1;
                    return Ok(());
                }
                SlotMeta::Deleted => {
                    if D::LEAVES_MARKERS {
                        // Revive the marker; the slot already counts as used.
                        self.storage.place(index, candidate);
                        self.active += 1;
                        return Ok(());
                    }
                    candidate.psl += 1;
                }
                SlotMeta::Occupied { psl, .. } => {
                    if !D::LEAVES_MARKERS && candidate.psl > psl {
                        match self.storage.replace(index, candidate) {
                            Some(evicted) => candidate = evicted,
                            None => {
                                self.active += 1;
                                self.used += 1;
                                return Ok(());
                            }
                        }
                    }
                    candidate.psl += 1;
                }
            }
        }
        Err(Error::ProbesExhausted)
    }

    /// Closes the gap left at `vacancy` after a removal.
    ///
    /// Successors along the removed key's probe walk move one step back,
    /// each with its PSL decremented, until an empty slot or an occupant
    /// already in its ideal position (PSL 0) ends the chain. Bounded to one
    /// full cycle of the table.
    fn shift_backward(&mut self, digest: u32, mut vacancy: usize, attempt: usize) {
        let capacity = self.storage.capacity();
        for step in attempt + 1..attempt + capacity {
            let next = self.probe.probe(digest, step, capacity);
            match self.storage.meta(next) {
                SlotMeta::Occupied { psl, .. } if psl > 0 => {
                    if let Some(mut slot) = self.storage.clear(next) {
                        slot.psl -= 1;
                        self.storage.place(vacancy, slot);
                        vacancy = next;
                    } else {
                        return;
                    }
                }
                _ => return,
            }
        }
    }

    /// Doubles the capacity if one more entry would exceed the load factor.
    fn grow_if_needed(&mut self) -> Result<(), Error> {
        let capacity = self.storage.capacity();
        if (self.used + 1) as f64 > capacity as f64 * self.load_factor {
            let doubled = capacity.checked_mul(2).ok_or(Error::OutOfMemory)?;
            self.rehash(doubled)?;
        }
        Ok(())
    }

    /// Halves the capacity if the fill ratio fell below the minimum load
    /// factor and the table is above its floor.
    fn shrink_if_needed(&mut self) -> Result<(), Error> {
        let capacity = self.storage.capacity();
        if capacity > INITIAL_CAPACITY && (self.active as f64) < capacity as f64 * self.min_load_factor
        {
            self.rehash(capacity / 2)?;
        }
        Ok(())
    }

    /// Migrates every live entry into a fresh storage generation of
    /// `new_capacity` slots, in old-storage slot order.
    ///
    /// Digests are carried over; PSLs are recomputed by the insert engine
    /// against the new capacity. Tombstone markers are not migrated. If the
    /// new generation cannot be allocated the current one is untouched.
    fn rehash(&mut self, new_capacity: usize) -> Result<(), Error> {
        let fresh = L::create(new_capacity)?;
        let mut old = mem::replace(&mut self.storage, fresh);
        self.active = 0;
        self.used = 0;
        for index in 0..old.capacity() {
            if let Some(mut slot) = old.clear(index) {
                slot.psl = 0;
                // Cannot fail: the fresh generation has vacant slots for
                // every migrated entry and the probe reaches all of them.
                self.insert_slot(slot)?;
            }
        }
        Ok(())
    }

    /// Hands one removed entry to the configured release hooks. Without
    /// hooks the key and value are dropped here.
    fn release(&self, slot: Slot<K, V>) {
        let Slot { key, value, .. } = slot;
        if let Some(releaser) = &self.key_release {
            releaser.release(key);
        }
        if let Some(releaser) = &self.value_release {
            releaser.release(value);
        }
    }

    /// Verifies the structural invariants. Test support.
    ///
    /// Checks: power-of-two capacity, counter consistency, every entry
    /// reachable at exactly its recorded PSL, and (under backward-shift) no
    /// prunable slot ahead of any entry on its probe path.
    #[cfg(test)]
    #[track_caller]
    fn assert_invariants(&self) {
        let capacity = self.storage.capacity();
        assert!(capacity.is_power_of_two());
        assert!(capacity >= INITIAL_CAPACITY);

        let mut active = 0;
        let mut used = 0;
        for index in 0..capacity {
            match self.storage.meta(index) {
                SlotMeta::Vacant => {}
                SlotMeta::Deleted => used += 1,
                SlotMeta::Occupied { digest, psl } => {
                    active += 1;
                    used += 1;
                    assert_eq!(
                        self.probe.probe(digest, psl as usize, capacity),
                        index,
                        "entry at slot {index} is not where its PSL says"
                    );
                    if !D::LEAVES_MARKERS {
                        for attempt in 0..psl as usize {
                            let earlier = self.probe.probe(digest, attempt, capacity);
                            match self.storage.meta(earlier) {
                                SlotMeta::Occupied { psl: other, .. } => assert!(
                                    other as usize >= attempt,
                                    "prunable slot {earlier} ahead of entry at {index}"
                                ),
                                state => {
                                    panic!("hole {state:?} at {earlier} ahead of entry at {index}")
                                }
                            }
                        }
                    }
                }
            }
        }
        assert_eq!(active, self.active);
        assert_eq!(used, self.used);
        assert!(self.active <= capacity);
    }
}

impl<K, V, L, D> Drop for Table<K, V, L, D>
where
    L: Storage<K, V>,
{
    fn drop(&mut self) {
        for index in 0..self.storage.capacity() {
            if let Some(slot) = self.storage.clear(index) {
                let Slot { key, value, .. } = slot;
                if let Some(releaser) = &self.key_release {
                    releaser.release(key);
                }
                if let Some(releaser) = &self.value_release {
                    releaser.release(value);
                }
            }
        }
    }
}

impl<K, V, L, D> Debug for Table<K, V, L, D>
where
    K: Debug,
    V: Debug,
    L: Storage<K, V>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(
            f,
            "Table {{ capacity: {}, active: {}, load_factor: {:.2} }}",
            self.storage.capacity(),
            self.active,
            self.load_factor
        )?;
        for index in 0..self.storage.capacity() {
            match self.storage.get(index) {
                SlotRef::Vacant => {}
                SlotRef::Deleted => writeln!(f, "  [{index}] deleted")?,
                SlotRef::Occupied {
                    digest,
                    psl,
                    key,
                    value,
                } => writeln!(
                    f,
                    "  [{index}] digest={digest:#010X} psl={psl} key={key:?} value={value:?}"
                )?,
            }
        }
        Ok(())
    }
}

/// Iterator over a table's entries in slot order. Created by
/// [`Table::iter`].
pub struct Iter<'a, K, V, L> {
    storage: &'a L,
    index: usize,
    _marker: PhantomData<(&'a K, &'a V)>,
}

impl<'a, K, V, L> Iterator for Iter<'a, K, V, L>
where
    L: Storage<K, V>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let storage: &'a L = self.storage;
        while self.index < storage.capacity() {
            let index = self.index;
            self.index += 1;
            if let SlotRef::Occupied { key, value, .. } = storage.get(index) {
                return Some((key, value));
            }
        }
        None
    }
}

/// The probe-length distribution of a table's live entries, from
/// [`Table::probe_stats`].
#[derive(Debug, Clone)]
pub struct ProbeStats {
    /// Number of live entries.
    pub active: usize,
    /// Slot-array capacity.
    pub capacity: usize,
    /// The largest PSL of any entry.
    pub max_psl: u32,
    /// Mean PSL across all entries; 0.0 for an empty table.
    pub average_psl: f64,
    /// Entry counts indexed by PSL.
    pub histogram: Vec<usize>,
}

#[cfg(feature = "std")]
impl ProbeStats {
    /// Pretty-prints the distribution to stdout.
    pub fn print(&self) {
        println!("=== Probe Length Distribution ===");
        println!(
            "Entries: {}/{} slots ({:.1}% full)",
            self.active,
            self.capacity,
            if self.capacity == 0 {
                0.0
            } else {
                self.active as f64 / self.capacity as f64 * 100.0
            }
        );
        println!(
            "Max PSL: {}  Average PSL: {:.3}",
            self.max_psl, self.average_psl
        );
        for (psl, count) in self.histogram.iter().enumerate() {
            if *count > 0 {
                println!("  psl {psl:>3}: {count}");
            }
        }
    }
}
