//! Saved progress
//!
//! Score/level snapshot persisted to LocalStorage when the game pauses and
//! restored at login. Restart clears it.

use serde::{Deserialize, Serialize};

use crate::sim::GameSession;

/// Minimal progress snapshot; the world itself is rebuilt from the seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedProgress {
    pub score: u32,
    pub level: u32,
}

impl SavedProgress {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "cube_dodge_progress";

    pub fn from_session(session: &GameSession) -> Self {
        Self {
            score: session.score,
            level: session.level,
        }
    }

    /// Load saved progress from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Option<Self> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()?;
        let json = storage.get_item(Self::STORAGE_KEY).ok()??;
        match serde_json::from_str(&json) {
            Ok(progress) => {
                log::info!("restored saved progress: {progress:?}");
                Some(progress)
            }
            Err(e) => {
                log::warn!("ignoring corrupt saved progress: {e}");
                None
            }
        }
    }

    /// Save progress to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("progress saved (score {})", self.score);
            }
        }
    }

    /// Remove any saved progress (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn clear() {
        if let Some(storage) = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
        {
            let _ = storage.remove_item(Self::STORAGE_KEY);
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Option<Self> {
        None
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {}

    #[cfg(not(target_arch = "wasm32"))]
    pub fn clear() {}
}
