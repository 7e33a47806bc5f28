pub mod playback;
pub mod search_state;

pub use playback::{MediaElement, PlaybackSession};
pub use search_state::SearchState;
