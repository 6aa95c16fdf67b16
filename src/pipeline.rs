//! Read -> dedup -> sorted write.
//!
//! Reading finishes before the output is even opened, so a bad line leaves the
//! output untouched.

use crate::Result;
use crate::diagnostics;
use crate::input::{Ingest, read_pool};
use crate::pool::{AddrPool, Filter};
use crate::render::{self, Format};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub filters: Vec<Filter>,
    pub format: Format,
    pub verbose: bool,
}

pub fn read<R: BufRead>(input: R, source: &str, opts: &Options) -> Result<AddrPool> {
    let Ingest {
        pool,
        lines,
        duplicates,
    } = read_pool(input, source, opts.verbose)?;

    if opts.verbose {
        eprintln!(
            "{}: {} lines, {} unique addresses, {} duplicates dropped",
            source,
            lines,
            pool.len(),
            duplicates
        );
    }
    Ok(pool)
}

pub fn write<W: Write>(output: &mut W, pool: &AddrPool, opts: &Options) -> Result<()> {
    match opts.format {
        Format::Text => render::write_text(output, pool, &opts.filters)?,
        Format::Json => render::write_json(output, pool, &opts.filters)?,
    }
    Ok(())
}

/// Whole run: NotStarted -> Reading -> Writing -> Done.
///
/// `open_output` is called only once every line parsed; a bad line fails the
/// run from Reading without creating the output.
pub fn run<R, W, F>(input: R, source: &str, open_output: F, opts: &Options) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: FnOnce() -> Result<W>,
{
    let pool = read(input, source, opts)?;
    check_filters(&pool, opts);

    let mut output = open_output()?;
    write(&mut output, &pool, opts)
}

/// Warn when a filter can never match anything in the pool.
fn check_filters(pool: &AddrPool, opts: &Options) {
    if !opts.verbose || pool.is_empty() {
        return;
    }
    for filter in &opts.filters {
        if pool.filtered(filter).next().is_none() {
            diagnostics::warn(format!("filter '{}' matches no address", filter));
        }
    }
}
