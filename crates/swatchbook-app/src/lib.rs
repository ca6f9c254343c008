//! Swatchbook Application
//!
//! Command-line shell around the palette generator, the token name builder and the
//! saved token library.

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod download;
pub mod error;
pub mod notify;

pub use cli::Cli;
pub use commands::Context;
pub use config::{AppConfig, ConfigError};
pub use error::{AppError, AppResult};
pub use notify::{ConsoleNotifier, Level, Notifier, RecordingNotifier};

/// Load the config named on the command line, or the default one.
/// A missing file gives defaults; an unreadable or malformed one is reported and ignored.
pub fn load_config(cli: &Cli, notifier: &mut dyn Notifier) -> AppConfig {
    let Some(path) = cli.config.clone().or_else(AppConfig::default_path) else {
        log::debug!("No config directory, using defaults");
        return AppConfig::default();
    };
    match AppConfig::load_from(&path) {
        Ok(config) => config,
        Err(e) => {
            notifier.warning(&format!("{}. Using defaults", e));
            AppConfig::default()
        }
    }
}

/// Run a parsed command line against stdout.
pub fn run(cli: Cli, notifier: &mut dyn Notifier) -> AppResult<()> {
    let config = load_config(&cli, notifier);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut ctx = Context { config: &config, notifier, out: &mut out };
    commands::handle(cli.command, &mut ctx)
}
