//! Logging configuration for the Coffee Ratio Calculator
//!
//! Logs are written to both the terminal and a file at:
//! `~/Library/Logs/Coffee-Ratio-Calculator/coffee-ratio-calculator.log`
//!
//! Users can find this log file to send for debugging purposes.

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

const LOG_FILE_NAME: &str = "coffee-ratio-calculator.log";

/// Rotate the log once it grows past this size
const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024;

/// Get the log directory path
/// On macOS: ~/Library/Logs/Coffee-Ratio-Calculator/
pub fn get_log_directory() -> Option<PathBuf> {
    if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Logs").join("Coffee-Ratio-Calculator"))
    } else {
        dirs::data_local_dir().map(|d| d.join("Coffee-Ratio-Calculator").join("logs"))
    }
}

/// Terminal level for the given verbosity
fn terminal_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn log_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(LevelFilter::Off) // Don't show thread IDs
        .set_target_level(LevelFilter::Off) // Don't show module targets
        .build()
}

/// Initialize the logging system
///
/// Sets up combined logging to:
/// - Terminal (info and above, debug when `verbose`)
/// - File (debug and above, for bug reports)
///
/// Returns the path to the log file on success
pub fn init_logging(verbose: bool) -> Option<PathBuf> {
    let Some(log_dir) = get_log_directory() else {
        eprintln!("Warning: Could not determine log directory");
        init_terminal_only(verbose);
        return None;
    };

    // Create log directory if it doesn't exist
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Could not create log directory: {}", e);
        init_terminal_only(verbose);
        return None;
    }

    let log_path = log_dir.join(LOG_FILE_NAME);

    // Rotate old log if it's too large
    if let Ok(metadata) = fs::metadata(&log_path) {
        if metadata.len() > MAX_LOG_SIZE {
            let backup_path = log_dir.join(format!("{}.old", LOG_FILE_NAME));
            let _ = fs::rename(&log_path, &backup_path);
        }
    }

    // Open log file (append mode)
    let log_file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not open log file: {}", e);
            // Fall back to terminal-only logging
            init_terminal_only(verbose);
            return None;
        }
    };

    let config = log_config();
    // Terminal gets info (debug when verbose), the file always gets debug
    let loggers: Vec<Box<dyn SharedLogger>> = vec![
        TermLogger::new(
            terminal_level(verbose),
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Debug, config, log_file),
    ];

    if CombinedLogger::init(loggers).is_err() {
        eprintln!("Warning: Logger already initialized");
    }

    // Write session start marker
    log::debug!("=== Coffee Ratio Calculator session started ===");
    log::debug!("Log file: {}", log_path.display());

    Some(log_path)
}

/// Initialize terminal-only logging (fallback if file logging fails)
fn init_terminal_only(verbose: bool) {
    let term_logger = TermLogger::new(
        terminal_level(verbose),
        log_config(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    let _ = CombinedLogger::init(vec![term_logger]);
}
