//! IPv4 address as read from input.
//!
//! Example: "10.0.010.1"  =>  octets [10, 0, 10, 1], text ["10", "0", "010", "1"]
//!
//! The text is kept so output reproduces the input spelling (leading zeros etc).
//! Ordering goes through the packed big-endian key, never through the text.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

pub const OCTETS: usize = 4;

/// 32-bit big-endian packing of the four octets.
pub type PackedKey = u32;

#[derive(Debug, Clone)]
pub struct Ipv4 {
    octets: [u8; OCTETS],
    text: [String; OCTETS],
}

impl Ipv4 {
    /// Callers must pass `text[i]` that parses to `octets[i]`; see `AddrParser::parse_octets`.
    pub(crate) fn from_parts(octets: [u8; OCTETS], text: [String; OCTETS]) -> Self {
        Self { octets, text }
    }

    pub fn octets(&self) -> &[u8; OCTETS] {
        &self.octets
    }

    pub fn text(&self) -> &[String; OCTETS] {
        &self.text
    }

    pub fn key(&self) -> PackedKey {
        u32::from_be_bytes(self.octets)
    }
}

impl PartialEq for Ipv4 {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Ipv4 {}

impl Ord for Ipv4 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Ipv4 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text().join("."))
    }
}

impl Serialize for Ipv4 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
