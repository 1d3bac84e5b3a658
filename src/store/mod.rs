pub mod config;
pub mod file;
pub mod memory;
pub mod snapshot;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use snapshot::PersistedSnapshot;

/// Store key for statuses that have left 未着手.
pub const COMPLETED_KEY: &str = "completedHobbies";
/// Store key for categories and items the user added on top of the seed.
pub const CUSTOM_KEY: &str = "customHobbies";

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Key/value durable storage. `get` answers `None` for missing and unreadable
/// values alike; flush-to-disk guarantees belong to the implementation, not
/// the callers.
pub trait PersistedStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}
