//! Where the language preference lives on each platform.

use portal::{PortalConfig, PreferenceStore};

/// Browser `localStorage`.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> anyhow::Result<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        window
            .local_storage()
            .map_err(|err| anyhow::anyhow!("localStorage blocked: {err:?}"))?
            .ok_or_else(|| anyhow::anyhow!("localStorage unavailable"))
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| anyhow::anyhow!("localStorage read failed: {err:?}"))
    }

    fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| anyhow::anyhow!("localStorage write failed: {err:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
pub fn platform_preferences(_config: &PortalConfig) -> Box<dyn PreferenceStore> {
    Box::new(LocalStorage)
}

/// Native builds keep a JSON file under the configured data directory, or
/// hold preferences in memory when there is none.
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_preferences(config: &PortalConfig) -> Box<dyn PreferenceStore> {
    match config.preferences_path() {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using file preferences");
            Box::new(portal::FilePreferences::new(path))
        }
        None => {
            tracing::debug!("no data directory, preferences kept in memory");
            Box::new(portal::MemoryPreferences::default())
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_without_data_dir_uses_memory() {
        let prefs = platform_preferences(&PortalConfig::default());
        prefs.save("k", "v").unwrap();
        assert_eq!(prefs.load("k").unwrap().as_deref(), Some("v"));
    }
}
