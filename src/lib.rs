#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod hash_table;

/// Byte-oriented 32-bit hash functions.
///
/// This module provides the `KeyHasher` strategy trait together with the
/// classical hash functions the table ships with (FNV-1a, djb2, sdbm,
/// MurmurHash3, CRC-32) and an adapter for `core::hash::BuildHasher`
/// implementations.
pub mod hasher;

/// Probe sequences for open addressing.
///
/// This module provides the `ProbeSequence` strategy trait and the linear,
/// quadratic, and double-hash probe implementations.
pub mod probe;

pub mod storage;

pub use hash_table::BackwardShift;
pub use hash_table::ByteEq;
pub use hash_table::Config;
pub use hash_table::Error;
pub use hash_table::KeyComparator;
pub use hash_table::Releaser;
pub use hash_table::Table;
pub use hash_table::TombstoneMark;
