use crate::model::{DATE_COLUMN, EXPERIMENT_COLUMN, PERIOD_COLUMN, ROOM_COLUMN};
use anyhow::{Result, bail};
use csv::Writer;
use std::path::PathBuf;

pub const INPUT_HEADER: [&str; 4] = [EXPERIMENT_COLUMN, DATE_COLUMN, PERIOD_COLUMN, ROOM_COLUMN];

/// Creates an empty schedule with the columns the converter reads.
pub fn init_template(filename: &str) -> Result<PathBuf> {
    let csv_filename = if filename.to_lowercase().ends_with(".csv") {
        PathBuf::from(filename)
    } else {
        PathBuf::from(format!("{}.csv", filename))
    };
    if csv_filename.exists() {
        bail!("{} already exists", csv_filename.display());
    }

    let mut wtr = Writer::from_path(&csv_filename)?;
    wtr.write_record(INPUT_HEADER)?;
    wtr.flush()?;
    log::info!("created template {}", csv_filename.display());
    Ok(csv_filename)
}
