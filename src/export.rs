use std::io::Write;
use std::path::Path;

use crate::error::{ExportError, Result};
use crate::math::Point2;

/// Writes `points` as two-column `x,y` CSV, one row per point in order.
///
/// Values use the shortest text that parses back to the same `f64`.
///
/// # Errors
///
/// Returns an [`ExportError`] if writing fails.
pub fn write_csv<W: Write>(writer: W, points: &[Point2]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    write_records(&mut wtr, points)?;
    wtr.flush().map_err(ExportError::from)?;
    Ok(())
}

/// Writes `points` as CSV to the file at `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an [`ExportError`] if the file cannot be created or written.
pub fn export_csv(path: &Path, points: &[Point2]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path).map_err(ExportError::from)?;
    write_records(&mut wtr, points)?;
    wtr.flush().map_err(ExportError::from)?;
    Ok(())
}

/// Renders `points` as a CSV string.
///
/// # Errors
///
/// Returns an [`ExportError`] if encoding fails.
pub fn to_csv_string(points: &[Point2]) -> Result<String> {
    let mut buf = Vec::with_capacity(points.len() * 24 + 4);
    write_csv(&mut buf, points)?;
    // Output is ASCII.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_records<W: Write>(wtr: &mut csv::Writer<W>, points: &[Point2]) -> Result<()> {
    wtr.write_record(["x", "y"]).map_err(ExportError::from)?;
    for p in points {
        wtr.write_record([p.x.to_string(), p.y.to_string()])
            .map_err(ExportError::from)?;
    }
    Ok(())
}
