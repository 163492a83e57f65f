//! Coffee & Latte Ratio Calculator
//!
//! An interactive calculator for brewed coffee and espresso-based lattes.
//! Works out water, grounds, espresso and milk quantities from strength,
//! roast and shot choices, and keeps named presets for the session.

mod actions;
mod core;
mod logging;
mod presets;
mod ui;

#[cfg(test)]
mod test_fixtures;

use std::io;
use std::process::ExitCode;

use crate::core::AppSettings;
use crate::ui::Session;

fn main() -> ExitCode {
    // Settings decide log verbosity, so they load first and report afterwards
    let loaded = AppSettings::load();
    let _log_path = logging::init_logging(loaded.settings.verbose_logging);
    loaded.log_notes();

    let settings = loaded.settings;
    log::debug!("Settings: {:?}", settings);

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), settings);

    match session.run() {
        Ok(()) => {
            log::debug!(
                "Session ended with {} preset(s)",
                session.presets().len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Session failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
