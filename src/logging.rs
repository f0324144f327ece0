//! Logging initialization.
//!
//! The TUI owns the terminal, so log lines go to a file.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, TermLogger, TerminalMode, WriteLogger,
};

/// Initialize the global logger writing to `path`.
///
/// If the file cannot be created a warning is printed and logging stays off.
pub fn initialize(path: &Path, level: LevelFilter) {
    match File::create(path) {
        Ok(file) => {
            let _ = WriteLogger::init(level, build_config(), file);
        }
        Err(err) => {
            eprintln!(
                "Warning: Could not create log file at {}: {}",
                path.display(),
                err
            );
        }
    }
}

/// Initializes a terminal logger for tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    let _ = CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
