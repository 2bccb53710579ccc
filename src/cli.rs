use clap::Parser;
use std::path::PathBuf;

/// Convert a ROC year's office calendar CSV into JSON records
#[derive(Debug, Parser)]
#[command(name = "csv_to_json")]
#[command(about = "Convert a ROC year's government office calendar CSV into JSON (prefers corrected releases)", long_about = None)]
#[command(version)]
pub struct CsvToJsonArgs {
    /// ROC year, e.g. 114
    #[arg(allow_negative_numbers = true)]
    pub roc_year: i64,

    /// Directory containing the source CSV files
    #[arg(long = "csv-dir")]
    pub csv_dir: Option<PathBuf>,

    /// Output directory for JSON records
    #[arg(long = "json-dir")]
    pub json_dir: Option<PathBuf>,

    /// Use this CSV file instead of searching the CSV directory
    #[arg(long = "csv")]
    pub csv: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Generate the holiday ICS from `{json-dir}/{year}.json` (offline)
#[derive(Debug, Parser)]
#[command(name = "json_to_ics")]
#[command(about = "Generate a holiday ICS file from a ROC year's JSON records", long_about = None)]
#[command(version)]
pub struct JsonToIcsArgs {
    /// ROC year, e.g. 115
    #[arg(allow_negative_numbers = true)]
    pub roc_year: i64,

    /// Directory containing JSON records
    #[arg(long = "json-dir")]
    pub json_dir: Option<PathBuf>,

    /// Output directory for the ICS file
    #[arg(long = "out-dir")]
    pub out_dir: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// ROC year -> JSON -> ICS in one step
#[derive(Debug, Parser)]
#[command(name = "calendar")]
#[command(about = "ROC year to JSON to ICS in one step, converting the CSV only when the JSON is missing", long_about = None)]
#[command(version)]
pub struct CalendarArgs {
    /// ROC year, e.g. 115
    #[arg(allow_negative_numbers = true)]
    pub roc_year: i64,

    /// Directory containing the source CSV files
    #[arg(long = "csv-dir")]
    pub csv_dir: Option<PathBuf>,

    /// Directory for JSON records
    #[arg(long = "json-dir")]
    pub json_dir: Option<PathBuf>,

    /// Output directory for the ICS file
    #[arg(long = "ics-dir")]
    pub ics_dir: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}
