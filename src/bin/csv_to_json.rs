use anyhow::Result;
use clap::Parser;
use twcal::cli::CsvToJsonArgs;

fn main() -> Result<()> {
    twcal::init_logger();
    twcal::commands::run_csv_to_json(CsvToJsonArgs::parse())
}
