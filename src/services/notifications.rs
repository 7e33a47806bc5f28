//! User-facing confirmation messages.
//!
//! Stand-in for the toast layer: collection mutations and degraded-mode
//! search surface short messages here instead of returning errors.
use std::sync::Mutex;

pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default notifier, routes messages to the log
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        log::info!("[Toast] {}", message);
    }

    fn info(&self, message: &str) {
        log::info!("[Toast] {}", message);
    }

    fn error(&self, message: &str) {
        log::warn!("[Toast] {}", message);
    }
}

/// Collects messages in memory, used as a fake in tests
#[derive(Default)]
pub struct MemoryNotifier {
    messages: Mutex<Vec<String>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    fn push(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

impl Notifier for MemoryNotifier {
    fn success(&self, message: &str) {
        self.push(message);
    }

    fn info(&self, message: &str) {
        self.push(message);
    }

    fn error(&self, message: &str) {
        self.push(message);
    }
}
