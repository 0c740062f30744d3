use anyhow::Result;

pub mod file;
pub mod memory;

pub use file::FilePreferences;
pub use memory::MemoryPreferences;

/// Durable key/value storage for user preferences.
///
/// Calls are synchronous: the portal treats a preference read or write as
/// completing within the event that triggered it.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
}
