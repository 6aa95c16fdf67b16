use crate::pool::{AddrPool, Filter};
use std::io::{self, Write};

/// Full descending listing, then one listing per filter, back to back.
pub fn write_text<W: Write>(out: &mut W, pool: &AddrPool, filters: &[Filter]) -> io::Result<()> {
    for ip in pool.iter_desc() {
        writeln!(out, "{}", ip)?;
    }
    for filter in filters {
        for ip in pool.filtered(filter) {
            writeln!(out, "{}", ip)?;
        }
    }
    out.flush()
}
