use crate::addr::Ipv4;
use crate::pool::{AddrPool, Filter};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub addresses: Vec<&'a Ipv4>,
    pub filters: Vec<FilteredView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct FilteredView<'a> {
    pub filter: &'a Filter,
    pub addresses: Vec<&'a Ipv4>,
}

pub fn build_report<'a>(pool: &'a AddrPool, filters: &'a [Filter]) -> Report<'a> {
    Report {
        addresses: pool.iter_desc().collect(),
        filters: filters
            .iter()
            .map(|filter| FilteredView {
                filter,
                addresses: pool.filtered(filter).collect(),
            })
            .collect(),
    }
}

pub fn write_json<W: Write>(out: &mut W, pool: &AddrPool, filters: &[Filter]) -> crate::Result<()> {
    let report = build_report(pool, filters);
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
