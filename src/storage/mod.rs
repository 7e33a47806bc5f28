// Persisted collections over an injected key-value storage port

pub mod library;
pub mod playlists;
pub mod port;

pub use library::LibraryStore;
pub use playlists::PlaylistStore;
pub use port::{FileStorage, MemoryStorage, StoragePort};
