//! Output predicates over an address's octets.
//!
//! Filters never touch the pool; they only decide which addresses a listing shows.

use crate::addr::ipv4::OCTETS;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Leading octets must match in order (1 to 4 of them).
    Prefix(Vec<u8>),
    /// At least one octet equals the value.
    Any(u8),
}

impl Filter {
    pub fn matches(&self, octets: &[u8; OCTETS]) -> bool {
        match self {
            Filter::Prefix(prefix) => octets.starts_with(prefix),
            Filter::Any(n) => octets.contains(n),
        }
    }

    /// clap value parser for `--prefix 46.70`.
    pub fn parse_prefix(s: &str) -> Result<Self, String> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() > OCTETS {
            return Err(format!("prefix has more than {} octets: {}", OCTETS, s));
        }
        let prefix = parts
            .into_iter()
            .map(parse_octet_arg)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Filter::Prefix(prefix))
    }

    /// clap value parser for `--any 46`.
    pub fn parse_any(s: &str) -> Result<Self, String> {
        parse_octet_arg(s).map(Filter::Any)
    }
}

fn parse_octet_arg(s: &str) -> Result<u8, String> {
    s.parse::<u8>()
        .map_err(|_| format!("not an octet (0-255): {:?}", s))
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Prefix(prefix) => {
                let parts: Vec<String> = prefix.iter().map(u8::to_string).collect();
                write!(f, "prefix {}", parts.join("."))
            }
            Filter::Any(n) => write!(f, "any {}", n),
        }
    }
}

impl Serialize for Filter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
