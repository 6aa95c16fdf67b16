use crate::Result;
use crate::addr::{AddrError, AddrParser};
use crate::diagnostics;
use crate::pool::AddrPool;
use crate::split::split_bytes;

use anyhow::Context;
use std::io::BufRead;

/// Pool built from one input plus counters for the verbose summary.
#[derive(Debug, Default)]
pub struct Ingest {
    pub pool: AddrPool,
    pub lines: usize,
    pub duplicates: usize,
}

/// Read every line of `reader` into a pool.
///
/// Expected columns (tab-separated, only the first is used):
/// addr  ...
///
/// Example:
/// 113.162.145.156\t111\t0
///
/// The first bad line aborts the whole read; the `AddrError` stays in the chain
/// under a "source:line" context. `source` only labels messages.
pub fn read_pool<R: BufRead>(reader: R, source: &str, verbose: bool) -> Result<Ingest> {
    let parser = AddrParser::new()?;
    let mut out = Ingest {
        pool: AddrPool::new(),
        lines: 0,
        duplicates: 0,
    };

    for (lineno, line) in reader.split(b'\n').enumerate() {
        let lno = lineno + 1;
        let mut line = line.with_context(|| format!("read {}:{}", source, lno))?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        out.lines = lno;

        // Only the address column is decoded; the rest may hold any bytes.
        let fields = split_bytes(&line, b'\t');
        let addr_bytes = fields.first().copied().unwrap_or_default();
        let addr_str = String::from_utf8_lossy(addr_bytes);

        let ip = std::str::from_utf8(addr_bytes)
            .map_err(|_| AddrError::Format("address is not valid UTF-8".to_string()))
            .and_then(|s| parser.parse(s))
            .with_context(|| format!("bad address at {}:{}: {:?}", source, lno, addr_str))?;

        if let Some(kept) = out.pool.insert(ip) {
            out.duplicates += 1;
            if verbose {
                diagnostics::warn(format!(
                    "duplicate address at {}:{}: {:?} ignored, keeping {}",
                    source, lno, addr_str, kept
                ));
            }
        }
    }

    Ok(out)
}
