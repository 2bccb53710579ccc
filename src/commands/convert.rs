use crate::calendar;
use crate::cli::{CsvToJsonArgs, JsonToIcsArgs};
use crate::commands::{load_config, override_path};
use anyhow::Result;
use log::debug;

pub fn run_csv_to_json(args: CsvToJsonArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    override_path(&mut config.paths.csv_dir, args.csv_dir);
    override_path(&mut config.paths.json_dir, args.json_dir);
    debug!("Effective config: {:?}", config);

    let report = match args.csv {
        Some(csv_path) => calendar::convert_csv_file(args.roc_year, &csv_path, &config.paths.json_dir)?,
        None => calendar::csv_to_json(
            args.roc_year,
            &config.paths.csv_dir,
            &config.paths.json_dir,
            &config.source,
        )?,
    };

    println!("✅ Conversion complete (ROC year {})", args.roc_year);
    println!("   Source CSV: {}", report.csv_path.display());
    println!("   Output JSON: {}", report.json_path.display());
    println!("   Records: {}", report.record_count);
    Ok(())
}

pub fn run_json_to_ics(args: JsonToIcsArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    override_path(&mut config.paths.json_dir, args.json_dir);
    override_path(&mut config.paths.ics_dir, args.out_dir);
    debug!("Effective config: {:?}", config);

    let report = calendar::json_to_ics(args.roc_year, &config.paths.json_dir, &config.paths.ics_dir)?;
    println!("✅ Wrote {} ({} holidays)", report.ics_path.display(), report.event_count);
    Ok(())
}
