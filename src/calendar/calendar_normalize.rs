//! CSV rows to the normalized `{year}.json` record list.

use crate::calendar::{
    find_source_csv, read_calendar_csv, CalendarError, ConversionReport, NormalizedRecord,
    TabularRecord,
};
use crate::config::SourceConfig;
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Flag value the source uses for days off
pub const HOLIDAY_FLAG: &str = "2";

/// Check for an 8-digit `YYYYMMDD` date string
pub fn is_valid_date(date: &str) -> bool {
    date.len() == 8 && date.bytes().all(|b| b.is_ascii_digit())
}

pub fn normalize_record(row: &TabularRecord) -> Option<NormalizedRecord> {
    let date = row.date.trim();
    if !is_valid_date(date) {
        return None;
    }

    Some(NormalizedRecord {
        date: date.to_string(),
        week: row.week.trim().to_string(),
        is_holiday: row.flag.trim() == HOLIDAY_FLAG,
        description: row.remark.trim().to_string(),
    })
}

/// Convert CSV rows, dropping every row without a valid date.
pub fn normalize_records(rows: &[TabularRecord]) -> Vec<NormalizedRecord> {
    let records: Vec<NormalizedRecord> = rows.iter().filter_map(normalize_record).collect();
    debug!("Normalized {} of {} rows", records.len(), rows.len());
    records
}

pub fn json_path(roc_year: i64, json_dir: &Path) -> PathBuf {
    json_dir.join(format!("{}.json", roc_year))
}

/// Write `records` to `{json_dir}/{roc_year}.json`, creating the directory if needed.
pub fn save_records(records: &[NormalizedRecord], roc_year: i64, json_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(json_dir)
        .with_context(|| format!("Failed to create JSON directory {}", json_dir.display()))?;
    let out_path = json_path(roc_year, json_dir);

    let content = serde_json::to_string_pretty(records)?;
    fs::write(&out_path, content)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;

    info!("Wrote {} records to {}", records.len(), out_path.display());
    Ok(out_path)
}

/// Convert an explicitly chosen CSV file into the year's JSON records.
pub fn convert_csv_file(roc_year: i64, csv_path: &Path, json_dir: &Path) -> Result<ConversionReport> {
    if !csv_path.is_file() {
        return Err(CalendarError::SourceFileNotFound(csv_path.to_path_buf()).into());
    }

    let rows = read_calendar_csv(csv_path)?;
    let records = normalize_records(&rows);
    let json_path = save_records(&records, roc_year, json_dir)?;

    Ok(ConversionReport {
        csv_path: csv_path.to_path_buf(),
        json_path,
        record_count: records.len(),
    })
}

/// Locate the year's CSV in `csv_dir` and convert it into `{json_dir}/{roc_year}.json`.
pub fn csv_to_json(
    roc_year: i64,
    csv_dir: &Path,
    json_dir: &Path,
    source: &SourceConfig,
) -> Result<ConversionReport> {
    let csv_path = find_source_csv(roc_year, csv_dir, &source.label, &source.corrected_marker)?;
    info!("Using CSV source {}", csv_path.display());
    convert_csv_file(roc_year, &csv_path, json_dir)
}
