//! CSV export of the table rows

use crate::dashboard::DashboardView;
use crate::error::Result;
use std::io::Write;

/// Write the rows currently in the table, with a header line
pub fn write<W: Write>(writer: &mut W, view: &DashboardView) -> Result<()> {
    let mut wtr = ::csv::Writer::from_writer(writer);
    for row in &view.table.rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(::csv::Error::from)?;
    Ok(())
}
