use anyhow::Result;
use clap::Parser;
use twcal::cli::JsonToIcsArgs;

fn main() -> Result<()> {
    twcal::init_logger();
    twcal::commands::run_json_to_ics(JsonToIcsArgs::parse())
}
