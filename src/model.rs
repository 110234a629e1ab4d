use clap::ValueEnum;
use serde::Serialize;

/// Category stamped on every generated event.
pub const CATEGORY: &str = "RiskAssess";

/// Column order expected by the calendar import.
pub const OUTPUT_HEADER: [&str; 22] = [
    "Subject",
    "Start Date",
    "Start Time",
    "End Date",
    "End Time",
    "All day event",
    "Reminder on/off",
    "Reminder Date",
    "Reminder Time",
    "Meeting Organizer",
    "Required Attendees",
    "Optional Attendees",
    "Meeting Resources",
    "Billing Information",
    "Categories",
    "Description",
    "Location",
    "Mileage",
    "Priority",
    "Private",
    "Sensitivity",
    "Show time as",
];

pub const EXPERIMENT_COLUMN: &str = "Experiment Name";
pub const DATE_COLUMN: &str = "Date";
pub const PERIOD_COLUMN: &str = "Period";
pub const ROOM_COLUMN: &str = "Room";

/// One row of the RiskAssess export. Columns other than these four are ignored.
///
/// `None` means the column is absent from the header or the row ends before
/// it; a blank cell is `Some("")`.
#[derive(Debug, Clone, Default)]
pub struct InputRecord {
    pub experiment: Option<String>,
    pub date: Option<String>,
    pub period: Option<String>,
    pub room: Option<String>,
    /// Source line the record starts on.
    pub line: Option<u64>,
}

impl InputRecord {
    pub fn new(experiment: &str, date: &str, period: &str, room: &str) -> Self {
        Self {
            experiment: Some(experiment.to_string()),
            date: Some(date.to_string()),
            period: Some(period.to_string()),
            room: Some(room.to_string()),
            line: None,
        }
    }
}

/// One calendar event row. Field order matches `OUTPUT_HEADER`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub subject: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub all_day_event: String,
    pub reminder_on_off: String,
    pub reminder_date: String,
    pub reminder_time: String,
    pub meeting_organizer: String,
    pub required_attendees: String,
    pub optional_attendees: String,
    pub meeting_resources: String,
    pub billing_information: String,
    pub categories: String,
    pub description: String,
    pub location: String,
    pub mileage: String,
    pub priority: String,
    pub private: String,
    pub sensitivity: String,
    pub show_time_as: String,
}

impl OutputRecord {
    pub fn event(subject: &str, date: &str, start_time: String, end_time: String, location: &str) -> Self {
        Self {
            subject: subject.to_string(),
            start_date: date.to_string(),
            start_time,
            end_date: date.to_string(),
            end_time,
            categories: CATEGORY.to_string(),
            location: location.to_string(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

/// How a period number becomes an event time window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Policy {
    /// Period start/end from the table; period 5 on Wednesdays ends with period 6.
    /// Rows with a bad period are skipped.
    #[default]
    WednesdayMerge,
    /// Five-minute marker at the period start; bad periods land at 07:50 AM with an error note.
    Placeholder,
}
