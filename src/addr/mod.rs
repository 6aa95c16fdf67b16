//! Address layer: the IPv4 value type and its parser.
//!
//! This module owns:
//! - Ipv4 (numeric octets + the exact text they were read from)
//! - AddrError (format vs range failures)
//! - AddrParser (dotted text or pre-split octets -> Ipv4)

pub mod error;
pub mod ipv4;
pub mod parse;

pub use error::AddrError;
pub use ipv4::{Ipv4, PackedKey};
pub use parse::AddrParser;
