//! Row conversion: one RiskAssess row becomes at most one calendar event.

use crate::{
    model::{InputRecord, OutputRecord, Policy},
    schedule::{PeriodSlot, PeriodTable, format_clock},
};
use chrono::{Datelike, NaiveDate, NaiveTime, TimeDelta, Weekday};
use log::{debug, warn};
use std::fmt;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Note written into the description of a placeholder event whose period was unusable.
pub const FALLBACK_NOTE: &str = "Error: Period number not found or invalid.";

const PLACEHOLDER_MINUTES: i64 = 5;
const FALLBACK_START: NaiveTime = fallback_clock(7, 50);
const FALLBACK_END: NaiveTime = fallback_clock(7, 55);

const MERGED_PERIOD: u8 = 5;
const MERGE_TARGET: u8 = 6;
const MERGE_DAY: Weekday = Weekday::Wed;

const fn fallback_clock(hour: u32, minute: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(time) => time,
        None => panic!("invalid fallback time"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    #[error("missing value for '{0}'")]
    MissingField(&'static str),
    #[error("period '{0}' is not a whole number")]
    InvalidPeriod(String),
    #[error("period {period} is outside 1-{max}")]
    PeriodOutOfRange { period: i64, max: usize },
    #[error("date '{0}' is not in YYYY-MM-DD form")]
    InvalidDate(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Converted(OutputRecord),
    /// Period was unusable; the event sits in the fallback window instead.
    Fallback { record: OutputRecord, reason: RowError },
    Skipped(RowError),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    pub rows: usize,
    pub converted: usize,
    pub fallbacks: usize,
    pub skipped: usize,
}

impl ConversionSummary {
    pub fn written(&self) -> usize {
        self.converted + self.fallbacks
    }
}

/// Enough of a row to find it again in the source file.
struct RowContext<'a>(&'a InputRecord);

impl fmt::Display for RowContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "N/A".to_string());
        if let Some(line) = self.0.line {
            write!(f, "line {line}, ")?;
        }
        write!(
            f,
            "Experiment Name: '{}', Period: '{}', Date: '{}'",
            show(&self.0.experiment),
            show(&self.0.period),
            show(&self.0.date)
        )
    }
}

pub struct RowConverter<'a> {
    table: &'a PeriodTable,
    policy: Policy,
}

impl<'a> RowConverter<'a> {
    pub fn new(table: &'a PeriodTable, policy: Policy) -> Self {
        Self { table, policy }
    }

    pub fn convert(&self, row: &InputRecord) -> RowOutcome {
        let result = match self.policy {
            Policy::WednesdayMerge => self.merge_window(row).map(RowOutcome::Converted),
            Policy::Placeholder => self.placeholder_window(row),
        };
        result.unwrap_or_else(RowOutcome::Skipped)
    }

    /// Converts every row in order, logging each skip or fallback.
    pub fn convert_all(&self, rows: &[InputRecord]) -> (Vec<OutputRecord>, ConversionSummary) {
        let mut summary = ConversionSummary {
            rows: rows.len(),
            ..Default::default()
        };
        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            match self.convert(row) {
                RowOutcome::Converted(record) => {
                    debug!("{} -> {} {}", RowContext(row), record.start_time, record.end_time);
                    summary.converted += 1;
                    records.push(record);
                }
                RowOutcome::Fallback { record, reason } => {
                    warn!(
                        "{reason}; placing event at {} ({})",
                        record.start_time,
                        RowContext(row)
                    );
                    summary.fallbacks += 1;
                    records.push(record);
                }
                RowOutcome::Skipped(reason) => {
                    warn!("skipping row, {reason} ({})", RowContext(row));
                    summary.skipped += 1;
                }
            }
        }
        (records, summary)
    }

    fn merge_window(&self, row: &InputRecord) -> Result<OutputRecord, RowError> {
        let (subject, date_text, room) = required_fields(row)?;
        let slot = lookup_period(row.period.as_deref(), self.table)?;
        let date = NaiveDate::parse_from_str(date_text.trim(), DATE_FORMAT)
            .map_err(|_| RowError::InvalidDate(date_text.to_string()))?;

        let mut end = slot.end;
        if slot.number == MERGED_PERIOD && date.weekday() == MERGE_DAY {
            if let Some(target) = self.table.slot(MERGE_TARGET) {
                end = target.end;
            }
        }
        Ok(OutputRecord::event(
            subject,
            date_text,
            format_clock(slot.start),
            format_clock(end),
            room,
        ))
    }

    fn placeholder_window(&self, row: &InputRecord) -> Result<RowOutcome, RowError> {
        let (subject, date_text, room) = required_fields(row)?;
        Ok(match lookup_period(row.period.as_deref(), self.table) {
            Ok(slot) => {
                let end = slot.start + TimeDelta::minutes(PLACEHOLDER_MINUTES);
                RowOutcome::Converted(OutputRecord::event(
                    subject,
                    date_text,
                    format_clock(slot.start),
                    format_clock(end),
                    room,
                ))
            }
            Err(reason) => RowOutcome::Fallback {
                record: OutputRecord::event(
                    subject,
                    date_text,
                    format_clock(FALLBACK_START),
                    format_clock(FALLBACK_END),
                    room,
                )
                .with_description(FALLBACK_NOTE),
                reason,
            },
        })
    }
}

fn required_fields(row: &InputRecord) -> Result<(&str, &str, &str), RowError> {
    let subject = row
        .experiment
        .as_deref()
        .ok_or(RowError::MissingField("Experiment Name"))?;
    let date = row.date.as_deref().ok_or(RowError::MissingField("Date"))?;
    let room = row.room.as_deref().ok_or(RowError::MissingField("Room"))?;
    Ok((subject, date, room))
}

fn lookup_period<'t>(text: Option<&str>, table: &'t PeriodTable) -> Result<&'t PeriodSlot, RowError> {
    let text = text.ok_or(RowError::MissingField("Period"))?;
    let value: i64 = text
        .trim()
        .parse()
        .map_err(|_| RowError::InvalidPeriod(text.to_string()))?;
    u8::try_from(value)
        .ok()
        .and_then(|number| table.slot(number))
        .ok_or(RowError::PeriodOutOfRange {
            period: value,
            max: table.len(),
        })
}
