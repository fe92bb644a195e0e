//! Entry storage for one table generation.
//!
//! A [`Storage`] owns the fixed-capacity slot array backing a table until the
//! next resize swaps in a fresh generation. Two layouts are provided:
//! [`Grouped`] keeps one record per slot, [`Columnar`] splits the same data
//! into parallel arrays so the digest+PSL scan that dominates search and
//! removal stays inside two dense `u32` columns. Both layouts behave
//! identically.
//!
//! Capacity is supplied by the table and is always a power of two; the
//! layouts assume this rather than validating it.

use alloc::vec::Vec;
use core::mem;

use crate::hash_table::Error;

/// An occupied slot's contents, moved in and out of storage by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot<K, V> {
    /// Cached digest of the key, so probing never rehashes.
    pub digest: u32,
    /// Probe sequence length: the attempt index at which the entry was
    /// placed relative to its digest's ideal slot.
    pub psl: u32,
    /// The stored key.
    pub key: K,
    /// The stored value.
    pub value: V,
}

/// A borrowed view of one slot.
#[derive(Debug)]
pub enum SlotRef<'a, K, V> {
    /// The slot holds no entry.
    Vacant,
    /// The slot held an entry that was removed under a tombstone policy.
    Deleted,
    /// The slot holds a live entry.
    Occupied {
        /// Cached digest of the occupant's key.
        digest: u32,
        /// The occupant's probe sequence length.
        psl: u32,
        /// The occupant's key.
        key: &'a K,
        /// The occupant's value.
        value: &'a V,
    },
}

/// The probe-loop view of one slot: occupancy plus the digest and PSL, with
/// no access to key or value.
///
/// Probe loops consult this for every slot they pass over and only touch the
/// full entry on a digest match, which is what the columnar layout's cache
/// story is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotMeta {
    /// The slot holds no entry.
    Vacant,
    /// The slot holds a tombstone marker.
    Deleted,
    /// The slot holds a live entry with this digest and PSL.
    Occupied {
        /// Cached digest of the occupant's key.
        digest: u32,
        /// The occupant's probe sequence length.
        psl: u32,
    },
}

/// The slot array for one table generation.
///
/// All index arguments must be below [`capacity`](Storage::capacity); the
/// engine only derives indices from a probe sequence, which guarantees this.
pub trait Storage<K, V>: Sized {
    /// Allocates storage with every slot vacant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if the allocation fails; the caller's
    /// current generation is untouched.
    fn create(capacity: usize) -> Result<Self, Error>;

    /// The number of slots.
    fn capacity(&self) -> usize;

    /// Occupancy, digest, and PSL of the slot, without touching key/value.
    fn meta(&self, index: usize) -> SlotMeta;

    /// A full borrowed view of the slot.
    fn get(&self, index: usize) -> SlotRef<'_, K, V>;

    /// Mutable access to the value of an occupied slot.
    fn value_mut(&mut self, index: usize) -> Option<&mut V>;

    /// Stores `slot` at `index`. The slot must not currently hold a live
    /// entry; a tombstone marker is overwritten.
    fn place(&mut self, index: usize, slot: Slot<K, V>);

    /// Vacates an occupied slot and returns its contents. Vacant slots and
    /// tombstone markers are left as they are.
    fn clear(&mut self, index: usize) -> Option<Slot<K, V>>;

    /// Replaces an occupied slot with a tombstone marker and returns the
    /// former occupant. Does nothing on a slot without a live entry.
    fn mark_deleted(&mut self, index: usize) -> Option<Slot<K, V>>;

    /// Stores `slot` at `index`, returning the previous occupant if the slot
    /// held one.
    fn replace(&mut self, index: usize, slot: Slot<K, V>) -> Option<Slot<K, V>> {
        let previous = self.clear(index);
        self.place(index, slot);
        previous
    }
}

enum Bucket<K, V> {
    Vacant,
    Deleted,
    Occupied(Slot<K, V>),
}

/// One record per slot.
///
/// The straightforward layout: digest, PSL, key, and value sit together, so
/// a hit touches a single location. Probe loops drag full records through
/// the cache even when they only need digest and PSL.
pub struct Grouped<K, V> {
    slots: Vec<Bucket<K, V>>,
}

impl<K, V> Storage<K, V> for Grouped<K, V> {
    fn create(capacity: usize) -> Result<Self, Error> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| Error::OutOfMemory)?;
        slots.resize_with(capacity, || Bucket::Vacant);
        Ok(Grouped { slots })
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn meta(&self, index: usize) -> SlotMeta {
        match &self.slots[index] {
            Bucket::Vacant => SlotMeta::Vacant,
            Bucket::Deleted => SlotMeta::Deleted,
            Bucket::Occupied(slot) => SlotMeta::Occupied {
                digest: slot.digest,
                psl: slot.psl,
            },
        }
    }

    fn get(&self, index: usize) -> SlotRef<'_, K, V> {
        match &self.slots[index] {
            Bucket::Vacant => SlotRef::Vacant,
            Bucket::Deleted => SlotRef::Deleted,
            Bucket::Occupied(slot) => SlotRef::Occupied {
                digest: slot.digest,
                psl: slot.psl,
                key: &slot.key,
                value: &slot.value,
            },
        }
    }

    fn value_mut(&mut self, index: usize) -> Option<&mut V> {
        match &mut self.slots[index] {
            Bucket::Occupied(slot) => Some(&mut slot.value),
            _ => None,
        }
    }

    fn place(&mut self, index: usize, slot: Slot<K, V>) {
        debug_assert!(!matches!(self.slots[index], Bucket::Occupied(_)));
        self.slots[index] = Bucket::Occupied(slot);
    }

    fn clear(&mut self, index: usize) -> Option<Slot<K, V>> {
        match mem::replace(&mut self.slots[index], Bucket::Vacant) {
            Bucket::Occupied(slot) => Some(slot),
            other => {
                self.slots[index] = other;
                None
            }
        }
    }

    fn mark_deleted(&mut self, index: usize) -> Option<Slot<K, V>> {
        match mem::replace(&mut self.slots[index], Bucket::Deleted) {
            Bucket::Occupied(slot) => Some(slot),
            other => {
                self.slots[index] = other;
                None
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Vacant,
    Deleted,
    Occupied,
}

/// Columns of parallel arrays, all indexed by slot.
///
/// Digests and PSLs live in their own dense arrays, so the probe loop's
/// digest+PSL scan never pulls keys or values into the cache.
pub struct Columnar<K, V> {
    states: Vec<State>,
    digests: Vec<u32>,
    psls: Vec<u32>,
    keys: Vec<Option<K>>,
    values: Vec<Option<V>>,
}

impl<K, V> Storage<K, V> for Columnar<K, V> {
    fn create(capacity: usize) -> Result<Self, Error> {
        fn column<T>(capacity: usize, fill: impl FnMut() -> T) -> Result<Vec<T>, Error> {
            let mut column = Vec::new();
            column
                .try_reserve_exact(capacity)
                .map_err(|_| Error::OutOfMemory)?;
            column.resize_with(capacity, fill);
            Ok(column)
        }

        Ok(Columnar {
            states: column(capacity, || State::Vacant)?,
            digests: column(capacity, || 0)?,
            psls: column(capacity, || 0)?,
            keys: column(capacity, || None)?,
            values: column(capacity, || None)?,
        })
    }

    fn capacity(&self) -> usize {
        self.states.len()
    }

    fn meta(&self, index: usize) -> SlotMeta {
        match self.states[index] {
            State::Vacant => SlotMeta::Vacant,
            State::Deleted => SlotMeta::Deleted,
            State::Occupied => SlotMeta::Occupied {
                digest: self.digests[index],
                psl: self.psls[index],
            },
        }
    }

    fn get(&self, index: usize) -> SlotRef<'_, K, V> {
        match self.states[index] {
            State::Vacant => SlotRef::Vacant,
            State::Deleted => SlotRef::Deleted,
            State::Occupied => match (&self.keys[index], &self.values[index]) {
                (Some(key), Some(value)) => SlotRef::Occupied {
                    digest: self.digests[index],
                    psl: self.psls[index],
                    key,
                    value,
                },
                _ => SlotRef::Vacant,
            },
        }
    }

    fn value_mut(&mut self, index: usize) -> Option<&mut V> {
        if self.states[index] != State::Occupied {
            return None;
        }
        self.values[index].as_mut()
    }

    fn place(&mut self, index: usize, slot: Slot<K, V>) {
        debug_assert!(self.states[index] != State::Occupied);
        self.states[index] = State::Occupied;
        self.digests[index] = slot.digest;
        self.psls[index] = slot.psl;
        self.keys[index] = Some(slot.key);
        self.values[index] = Some(slot.value);
    }

    fn clear(&mut self, index: usize) -> Option<Slot<K, V>> {
        if self.states[index] != State::Occupied {
            return None;
        }
        self.states[index] = State::Vacant;
        let key = self.keys[index].take()?;
        let value = self.values[index].take()?;
        Some(Slot {
            digest: self.digests[index],
            psl: self.psls[index],
            key,
            value,
        })
    }

    fn mark_deleted(&mut self, index: usize) -> Option<Slot<K, V>> {
        if self.states[index] != State::Occupied {
            return None;
        }
        self.states[index] = State::Deleted;
        let key = self.keys[index].take()?;
        let value = self.values[index].take()?;
        Some(Slot {
            digest: self.digests[index],
            psl: self.psls[index],
            key,
            value,
        })
    }
}
