//! Local caching module.
//!
//! This module provides the `KeyValueCache` trait - a byte-oriented
//! get/put store keyed by string - and the `FileStore` backend that
//! keeps one JSON file per key under the cache directory.
//!
//! Cached keys:
//! - `events`: the group's past event list
//! - `event_attendance.<id>`: attendance for one event
//!
//! There is no expiry: a hit is authoritative and the network is never
//! consulted for a present key.

pub mod store;

pub use store::{CachedData, FileStore, KeyValueCache};
