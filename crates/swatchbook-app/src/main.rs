//! Main application entry point.

use clap::Parser;
use swatchbook_app::{Cli, ConsoleNotifier, Notifier};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
    log::info!("Starting Swatchbook");

    let mut notifier = ConsoleNotifier;
    if let Err(e) = swatchbook_app::run(cli, &mut notifier) {
        notifier.error(&e.to_string());
        std::process::exit(1);
    }
}
