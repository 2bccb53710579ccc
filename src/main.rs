use anyhow::Result;
use clap::Parser;
use log::info;
use twcal::cli::CalendarArgs;

fn main() -> Result<()> {
    twcal::init_logger();

    let args = CalendarArgs::parse();
    info!("Building holiday calendar for ROC year {}", args.roc_year);
    twcal::commands::run_calendar(args)
}
