//! JSON export of a dashboard view

use crate::dashboard::DashboardView;
use crate::error::Result;
use std::io::Write;

pub fn write<W: Write>(writer: &mut W, view: &DashboardView) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, view)?;
    writeln!(writer).map_err(serde_json::Error::io)?;
    Ok(())
}
