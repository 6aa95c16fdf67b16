//! Reading tab-separated address lists into an [`AddrPool`](crate::pool::AddrPool).

pub mod read;

pub use read::{Ingest, read_pool};
