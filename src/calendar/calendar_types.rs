//! Record types shared by the conversion stages.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One row of the office calendar CSV, keyed by its header columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TabularRecord {
    #[serde(rename = "西元日期")]
    pub date: String,
    #[serde(rename = "星期")]
    pub week: String,
    #[serde(rename = "是否放假")]
    pub flag: String,
    #[serde(rename = "備註")]
    pub remark: String,
}

impl TabularRecord {
    pub fn new(date: &str, week: &str, flag: &str, remark: &str) -> Self {
        Self {
            date: date.to_string(),
            week: week.to_string(),
            flag: flag.to_string(),
            remark: remark.to_string(),
        }
    }
}

/// A validated day of the year as stored in `{year}.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub date: String,
    pub week: String,
    #[serde(rename = "isHoliday")]
    pub is_holiday: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub csv_path: PathBuf,
    pub json_path: PathBuf,
    pub record_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionReport {
    pub ics_path: PathBuf,
    pub event_count: usize,
}
