use std::fs::File;
use std::io;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::forecast::HourRow;

/// Output header. The first column is the row index and has no name.
pub const HEADER: [&str; 5] = ["", "day\n\nhour", "waves_size", "wind_speed", "wind direction"];

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to create output file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Serialize)]
struct CsvRecord<'a> {
    index: usize,
    day_hour: &'a str,
    waves_size: &'a str,
    wind_speed: &'a str,
    wind_direction: &'a str,
}

/// Write the header and one record per row, prefixed with the row's position
/// in `rows`. Returns the number of data records written.
///
/// The header is written even when `rows` is empty.
pub fn write_rows<W: io::Write>(writer: W, rows: &[HourRow]) -> Result<usize, WriteError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;

    for (index, row) in rows.iter().enumerate() {
        csv_writer.serialize(CsvRecord {
            index,
            day_hour: &row.day_hour,
            waves_size: &row.waves_size,
            wind_speed: &row.wind_speed,
            wind_direction: &row.wind_direction,
        })?;
    }

    csv_writer.flush()?;
    Ok(rows.len())
}

/// Create (or truncate) `path` and write the rows into it.
#[instrument(skip(rows), fields(rows = rows.len()))]
pub fn write_rows_to_path(path: &Path, rows: &[HourRow]) -> Result<usize, WriteError> {
    let file = File::create(path)?;
    let written = write_rows(io::BufWriter::new(file), rows)?;
    debug!("Wrote {} records to {}", written, path.display());
    Ok(written)
}
