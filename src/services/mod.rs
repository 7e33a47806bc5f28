pub mod notifications;

pub use notifications::{LogNotifier, MemoryNotifier, Notifier};
