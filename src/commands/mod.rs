//! Handlers behind the `csv_to_json`, `json_to_ics` and `calendar` binaries.
//!
//! Each handler resolves the effective [`Config`] (config file, then command
//! line overrides), runs the library operation and prints progress to stdout.

use crate::config::Config;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub mod calendar;
pub mod convert;

pub use calendar::run_calendar;
pub use convert::{run_csv_to_json, run_json_to_ics};

/// Load the config named on the command line, or the user config otherwise.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn override_path(target: &mut PathBuf, value: Option<PathBuf>) {
    if let Some(value) = value {
        *target = value;
    }
}
