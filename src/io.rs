use crate::model::{
    DATE_COLUMN, EXPERIMENT_COLUMN, InputRecord, OUTPUT_HEADER, OutputRecord, PERIOD_COLUMN,
    ROOM_COLUMN,
};
use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::{fs::File, io::Write, path::Path};

/// Reads every row of a RiskAssess export, keyed by its header line.
pub fn load_schedule<P: AsRef<Path>>(path: P) -> Result<Vec<InputRecord>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    read_schedule(file).with_context(|| format!("cannot read {}", path.display()))
}

/// Positions of the columns the converter reads.
struct ColumnIndex {
    experiment: Option<usize>,
    date: Option<usize>,
    period: Option<usize>,
    room: Option<usize>,
}

impl ColumnIndex {
    fn new(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h == name);
        Self {
            experiment: find(EXPERIMENT_COLUMN),
            date: find(DATE_COLUMN),
            period: find(PERIOD_COLUMN),
            room: find(ROOM_COLUMN),
        }
    }

    fn record(&self, row: &StringRecord) -> InputRecord {
        let cell = |index: Option<usize>| index.and_then(|i| row.get(i)).map(str::to_string);
        InputRecord {
            experiment: cell(self.experiment),
            date: cell(self.date),
            period: cell(self.period),
            room: cell(self.room),
            line: row.position().map(|p| p.line()),
        }
    }
}

pub fn read_schedule<R: std::io::Read>(reader: R) -> Result<Vec<InputRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let columns = ColumnIndex::new(rdr.headers()?);
    let mut records = Vec::new();
    for result in rdr.records() {
        records.push(columns.record(&result?));
    }
    Ok(records)
}

/// Writes the calendar header and one line per event, in order.
pub fn write_calendar<P: AsRef<Path>>(path: P, records: &[OutputRecord]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    write_events(file, records).with_context(|| format!("cannot write {}", path.display()))
}

pub fn write_events<W: Write>(writer: W, records: &[OutputRecord]) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(writer);
    wtr.write_record(OUTPUT_HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_named_columns_and_ignores_extras() {
        let data = "Teacher,Experiment Name,Date,Period,Room\nSmith,Titration,2024-03-06,5,Lab 3\n";
        let rows = read_schedule(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].experiment.as_deref(), Some("Titration"));
        assert_eq!(rows[0].period.as_deref(), Some("5"));
        assert_eq!(rows[0].room.as_deref(), Some("Lab 3"));
    }

    #[test]
    fn blank_cell_is_kept_and_missing_column_is_none() {
        let data = "Experiment Name,Date,Period\n,,2\n";
        let rows = read_schedule(data.as_bytes()).unwrap();
        assert_eq!(rows[0].experiment.as_deref(), Some(""));
        assert_eq!(rows[0].date.as_deref(), Some(""));
        assert_eq!(rows[0].room, None);
    }

    #[test]
    fn short_rows_are_tolerated() {
        let data = "Experiment Name,Date,Period,Room\nTitration,2024-03-06\n";
        let rows = read_schedule(data.as_bytes()).unwrap();
        assert_eq!(rows[0].date.as_deref(), Some("2024-03-06"));
        assert_eq!(rows[0].period, None);
        assert_eq!(rows[0].room, None);
    }

    #[test]
    fn records_remember_their_starting_line() {
        let data = "Experiment Name,Date,Period,Room\n\"Titration\nwith indicator\",2024-03-06,5,Lab 3\nFlame tests,2024-03-04,1,Lab 1\n";
        let rows = read_schedule(data.as_bytes()).unwrap();
        assert_eq!(rows[0].experiment.as_deref(), Some("Titration\nwith indicator"));
        assert_eq!(rows[0].line, Some(2));
        assert_eq!(rows[1].line, Some(4));
    }

    #[test]
    fn header_is_written_even_without_events() {
        let mut out = Vec::new();
        write_events(&mut out, &[]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("{}\r\n", OUTPUT_HEADER.join(",")));
    }

    #[test]
    fn event_rows_have_twenty_two_fields() {
        let record = OutputRecord::event(
            "Titration",
            "2024-03-06",
            "01:55:00 PM".to_string(),
            "02:35:00 PM".to_string(),
            "Lab 3",
        );
        let mut out = Vec::new();
        write_events(&mut out, &[record]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let line = text.lines().nth(1).unwrap();
        assert_eq!(
            line,
            "Titration,2024-03-06,01:55:00 PM,2024-03-06,02:35:00 PM,,,,,,,,,,RiskAssess,,Lab 3,,,,,"
        );
        assert_eq!(line.split(',').count(), OUTPUT_HEADER.len());
    }
}
