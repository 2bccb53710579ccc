//! Holiday iCalendar output built from the normalized JSON records.

use crate::calendar::{is_valid_date, json_path, CalendarError, EmissionReport, NormalizedRecord};
use anyhow::{Context, Result};
use chrono::Local;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const CRLF: &str = "\r\n";
const PRODID: &str = "-//NTUST CCE HCI Lab//Taiwan Government Office Cals//ZH-TW";
const EVENT_SUMMARY: &str = "放假日";
const EVENT_CATEGORY: &str = "dayoff";
const DTSTAMP_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Offset between ROC and Gregorian year numbering
pub const ROC_EPOCH_OFFSET: i128 = 1911;

/// Widened so that any ROC year accepted on the command line has a Gregorian equivalent
pub fn gregorian_year(roc_year: i64) -> i128 {
    i128::from(roc_year) + ROC_EPOCH_OFFSET
}

/// Description shared by every event of the year's calendar
pub fn calendar_description(roc_year: i64) -> String {
    format!(
        "中華民國{}年（西元{}年）政府行政機關辦公日曆表",
        roc_year,
        gregorian_year(roc_year)
    )
}

pub fn ics_path(roc_year: i64, ics_dir: &Path) -> PathBuf {
    ics_dir.join(format!("{}-dayoffs.ics", roc_year))
}

/// Load `{json_dir}/{roc_year}.json`.
pub fn load_records(roc_year: i64, json_dir: &Path) -> Result<Vec<NormalizedRecord>> {
    let path = json_path(roc_year, json_dir);
    if !path.is_file() {
        return Err(CalendarError::RecordsNotFound(path).into());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let records: Vec<NormalizedRecord> =
        serde_json::from_str(&content).map_err(CalendarError::InvalidRecords)?;

    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Render one all-day VEVENT with a fresh UID and DTSTAMP, without a trailing line break.
pub fn render_event(date: &str, description: &str) -> String {
    let lines = [
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}", Uuid::new_v4()),
        format!("SUMMARY:{}", EVENT_SUMMARY),
        "STATUS:CONFIRMED".to_string(),
        "TRANSP:TRANSPARENT".to_string(),
        format!("DTSTART;VALUE=DATE:{}", date),
        format!("DTSTAMP:{}", Local::now().format(DTSTAMP_FORMAT)),
        format!("CATEGORIES:{}", EVENT_CATEGORY),
        format!("DESCRIPTION:{}", description),
        "END:VEVENT".to_string(),
    ];
    lines.join(CRLF)
}

fn holiday_dates(records: &[NormalizedRecord]) -> impl Iterator<Item = &str> {
    records
        .iter()
        .filter(|r| r.is_holiday && is_valid_date(&r.date))
        .map(|r| r.date.as_str())
}

/// Render the whole calendar document. Only holidays become events, in input order.
pub fn render_calendar(roc_year: i64, records: &[NormalizedRecord]) -> String {
    let description = calendar_description(roc_year);

    let mut blocks = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PRODID),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
    ];
    blocks.extend(holiday_dates(records).map(|date| render_event(date, &description)));
    blocks.push("END:VCALENDAR".to_string());

    let mut content = blocks.join(CRLF);
    content.push_str(CRLF);
    content
}

/// Write `{ics_dir}/{roc_year}-dayoffs.ics` for the given records.
pub fn write_ics(roc_year: i64, records: &[NormalizedRecord], ics_dir: &Path) -> Result<EmissionReport> {
    fs::create_dir_all(ics_dir)
        .with_context(|| format!("Failed to create ICS directory {}", ics_dir.display()))?;
    let out_path = ics_path(roc_year, ics_dir);

    let content = render_calendar(roc_year, records);
    let event_count = holiday_dates(records).count();
    fs::write(&out_path, content)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;

    info!("Wrote {} holiday events to {}", event_count, out_path.display());
    Ok(EmissionReport { ics_path: out_path, event_count })
}

pub fn json_to_ics(roc_year: i64, json_dir: &Path, ics_dir: &Path) -> Result<EmissionReport> {
    let records = load_records(roc_year, json_dir)?;
    write_ics(roc_year, &records, ics_dir)
}
