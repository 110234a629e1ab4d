use crate::{
    convert::{ConversionSummary, RowConverter},
    io::{load_schedule, write_calendar},
    model::Policy,
    schedule::PeriodTable,
};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// File written when no output is named.
pub const DEFAULT_OUTPUT: &str = "output.csv";

pub fn output_path(output: Option<PathBuf>) -> PathBuf {
    output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
}

/// Reads the whole schedule, converts it in memory, then writes the calendar file.
/// A read failure therefore never leaves a partial output behind.
pub fn export_calendar(
    input: &Path,
    output: &Path,
    table: &PeriodTable,
    policy: Policy,
) -> Result<ConversionSummary> {
    let rows = load_schedule(input)?;
    log::info!("read {} rows from {} ({:?})", rows.len(), input.display(), policy);

    let converter = RowConverter::new(table, policy);
    let (records, summary) = converter.convert_all(&rows);

    write_calendar(output, &records)?;
    log::info!(
        "wrote {} events to {} ({} skipped, {} placeholders)",
        summary.written(),
        output.display(),
        summary.skipped,
        summary.fallbacks
    );
    Ok(summary)
}
