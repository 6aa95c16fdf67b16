//! Address pool and the output predicates applied while walking it.

pub mod filter;

pub use filter::Filter;

use crate::addr::{Ipv4, PackedKey};
use std::collections::BTreeMap;

/// Addresses keyed by packed value. Stored ascending, read descending.
#[derive(Debug, Default, Clone)]
pub struct AddrPool {
    map: BTreeMap<PackedKey, Ipv4>,
}

impl AddrPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under `ip.key()` unless that key is already present.
    ///
    /// First seen wins: returns the address already stored when `ip` was dropped.
    pub fn insert(&mut self, ip: Ipv4) -> Option<&Ipv4> {
        use std::collections::btree_map::Entry;

        match self.map.entry(ip.key()) {
            Entry::Vacant(slot) => {
                slot.insert(ip);
                None
            }
            Entry::Occupied(kept) => Some(&*kept.into_mut()),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Highest key first. Borrows, so the pool can be walked again.
    pub fn iter_desc(&self) -> impl DoubleEndedIterator<Item = &Ipv4> + '_ {
        self.map.values().rev()
    }

    /// Descending walk restricted to addresses matching `filter`.
    pub fn filtered<'a>(&'a self, filter: &'a Filter) -> impl Iterator<Item = &'a Ipv4> + 'a {
        self.iter_desc().filter(move |ip| filter.matches(ip.octets()))
    }
}
