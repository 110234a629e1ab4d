//! Period table: maps a period number onto a start/end clock time.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer};
use std::{fs, path::Path};

/// 12-hour clock layout used both in period files and in the output CSV.
pub const CLOCK_FORMAT: &str = "%I:%M:%S %p";

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("failed to read period file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid period file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("period table is empty")]
    Empty,
    #[error("period at position {position} is numbered {found}, expected {expected}")]
    OutOfSequence {
        position: usize,
        expected: u8,
        found: u8,
    },
    #[error("period {0} ends before it starts")]
    EndsBeforeStart(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PeriodSlot {
    pub number: u8,
    #[serde(deserialize_with = "deserialize_clock")]
    pub start: NaiveTime,
    #[serde(deserialize_with = "deserialize_clock")]
    pub end: NaiveTime,
}

impl PeriodSlot {
    pub const fn new(number: u8, start: NaiveTime, end: NaiveTime) -> Self {
        Self { number, start, end }
    }
}

const fn clock(hour: u32, minute: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(time) => time,
        None => panic!("invalid clock time in standard period table"),
    }
}

/// Periods 5 and 6 share a start; period 6 is the short Wednesday variant.
const STANDARD_PERIODS: [PeriodSlot; 6] = [
    PeriodSlot::new(1, clock(8, 45), clock(9, 30)),
    PeriodSlot::new(2, clock(9, 30), clock(10, 50)),
    PeriodSlot::new(3, clock(11, 10), clock(12, 35)),
    PeriodSlot::new(4, clock(12, 35), clock(13, 15)),
    PeriodSlot::new(5, clock(13, 55), clock(15, 15)),
    PeriodSlot::new(6, clock(13, 55), clock(14, 35)),
];

#[derive(Debug, Deserialize)]
struct PeriodFile {
    period: Vec<PeriodSlot>,
}

/// Ordered period slots; slot `i` always holds period `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodTable {
    slots: Vec<PeriodSlot>,
}

impl Default for PeriodTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl PeriodTable {
    pub fn standard() -> Self {
        Self {
            slots: STANDARD_PERIODS.to_vec(),
        }
    }

    pub fn from_slots(slots: Vec<PeriodSlot>) -> Result<Self, ScheduleError> {
        if slots.is_empty() {
            return Err(ScheduleError::Empty);
        }
        for (i, slot) in slots.iter().enumerate() {
            let expected = u8::try_from(i + 1).unwrap_or(u8::MAX);
            if slot.number != expected {
                return Err(ScheduleError::OutOfSequence {
                    position: i,
                    expected,
                    found: slot.number,
                });
            }
            if slot.end < slot.start {
                return Err(ScheduleError::EndsBeforeStart(slot.number));
            }
        }
        Ok(Self { slots })
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ScheduleError> {
        let file: PeriodFile = toml::from_str(text)?;
        Self::from_slots(file.period)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScheduleError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ScheduleError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Slot for a 1-based period number.
    pub fn slot(&self, number: u8) -> Option<&PeriodSlot> {
        let index = usize::from(number).checked_sub(1)?;
        self.slots.get(index)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

pub fn parse_clock(text: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(text.trim(), CLOCK_FORMAT)
}

pub fn format_clock(time: NaiveTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}

fn deserialize_clock<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
    let text = String::deserialize(deserializer)?;
    parse_clock(&text).map_err(|e| serde::de::Error::custom(format!("bad time {text:?}: {e}")))
}
