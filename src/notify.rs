// src/notify.rs
//! User-visible notifications.
//!
//! The pipeline reports progress and recovered failures through this trait
//! rather than printing directly, so tests can record what the user would
//! have seen.

/// The ability to surface a short message to the user.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Prints notices to stdout and mirrors them to the log.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("{}", message);
        log::info!("{}", message);
    }
}
