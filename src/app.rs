use crate::calendar::{self, ConversionReport, EmissionReport};
use crate::config::Config;
use anyhow::Result;
use log::info;
use std::path::PathBuf;

/// What happened to the year's JSON records during a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalization {
    Reused,
    Converted(ConversionReport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutcome {
    pub json_path: PathBuf,
    pub normalization: Normalization,
    pub emission: EmissionReport,
}

/// Runs CSV -> JSON (when needed) -> ICS for a single year.
pub struct Application {
    config: Config,
}

impl Application {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run(&self, roc_year: i64) -> Result<PipelineOutcome> {
        let paths = &self.config.paths;
        let json_path = calendar::json_path(roc_year, &paths.json_dir);

        let normalization = if json_path.is_file() {
            info!("Reusing existing records {}", json_path.display());
            Normalization::Reused
        } else {
            info!("No records at {}, converting from CSV", json_path.display());
            let report =
                calendar::csv_to_json(roc_year, &paths.csv_dir, &paths.json_dir, &self.config.source)?;
            Normalization::Converted(report)
        };

        let emission = calendar::json_to_ics(roc_year, &paths.json_dir, &paths.ics_dir)?;
        Ok(PipelineOutcome { json_path, normalization, emission })
    }
}
