//! User-facing notifications. Fire-and-forget: nothing here can fail.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Success => "ok",
            Level::Warning => "warning",
            Level::Error => "error",
        })
    }
}

/// Receiver for short status messages.
pub trait Notifier {
    fn notify(&mut self, level: Level, message: &str);

    fn success(&mut self, message: &str) {
        self.notify(Level::Success, message);
    }

    fn warning(&mut self, message: &str) {
        self.notify(Level::Warning, message);
    }

    fn error(&mut self, message: &str) {
        self.notify(Level::Error, message);
    }
}

/// Writes notifications to stderr so stdout stays clean for exports.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, level: Level, message: &str) {
        match level {
            Level::Success => log::info!("{}", message),
            Level::Warning => log::warn!("{}", message),
            Level::Error => log::error!("{}", message),
        }
        eprintln!("{}: {}", level, message);
    }
}

/// Keeps notifications in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub messages: Vec<(Level, String)>,
}

impl RecordingNotifier {
    pub fn last(&self) -> Option<&(Level, String)> {
        self.messages.last()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, level: Level, message: &str) {
        self.messages.push((level, message.to_string()));
    }
}
