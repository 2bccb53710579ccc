use crate::app::{Application, Normalization};
use crate::cli::CalendarArgs;
use crate::commands::{load_config, override_path};
use anyhow::Result;
use log::debug;

pub fn run_calendar(args: CalendarArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    override_path(&mut config.paths.csv_dir, args.csv_dir);
    override_path(&mut config.paths.json_dir, args.json_dir);
    override_path(&mut config.paths.ics_dir, args.ics_dir);
    debug!("Effective config: {:?}", config);

    let outcome = Application::new(config).run(args.roc_year)?;
    match &outcome.normalization {
        Normalization::Reused => {
            println!("✅ Found JSON: {}", outcome.json_path.display());
        }
        Normalization::Converted(report) => {
            println!("📄 {} not found, converted from CSV", outcome.json_path.display());
            println!("   Source CSV: {}", report.csv_path.display());
            println!("   Records: {}", report.record_count);
        }
    }
    println!(
        "🎉 Wrote ICS: {} ({} holidays)",
        outcome.emission.ics_path.display(),
        outcome.emission.event_count
    );
    Ok(())
}
