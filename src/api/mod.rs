// Jamendo API client modules

pub mod search;

// Re-export commonly used functions
pub use search::{search_tracks, SearchOutcome};
