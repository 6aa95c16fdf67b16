use std::fmt;

/// Why a dotted address could not be turned into an [`Ipv4`](super::Ipv4).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddrError {
    /// Wrong number of octet fields, or a field that is not an integer token.
    Format(String),
    /// An integer token outside 0..=255.
    Range(String),
}

impl fmt::Display for AddrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddrError::Format(msg) => write!(f, "format error: {}", msg),
            AddrError::Range(msg) => write!(f, "range error: {}", msg),
        }
    }
}

impl std::error::Error for AddrError {}
