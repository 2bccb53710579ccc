pub mod app;
pub mod calendar;
pub mod cli;
pub mod commands;
pub mod config;

use env_logger::Env;

/// Initialize logging with a timestamped format; `RUST_LOG` overrides the `info` default.
pub fn init_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

// Re-export commonly used types
pub use app::{Application, Normalization, PipelineOutcome};
pub use calendar::{CalendarError, NormalizedRecord, TabularRecord};
pub use config::Config;
