//! High score persistence.
//!
//! A single scalar survives between sessions. Storage failures are never
//! fatal: the in-memory value keeps working and a warning is logged.

/// Persistence collaborator for the high-score scalar
pub trait ScoreStore {
    /// None when nothing is stored or the backend is unavailable
    fn load(&mut self) -> Option<u64>;
    /// Best effort; failures are swallowed by the implementation
    fn save(&mut self, score: u64);
}

/// In-memory store for tests, headless runs, and storage-blocked browsers
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    value: Option<u64>,
}

impl ScoreStore for MemoryScoreStore {
    fn load(&mut self) -> Option<u64> {
        self.value
    }

    fn save(&mut self, score: u64) {
        self.value = Some(score);
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageScoreStore;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::ScoreStore;

    /// LocalStorage key
    const STORAGE_KEY: &str = "order_rush_highscore";

    /// LocalStorage-backed store (WASM only)
    #[derive(Debug, Default)]
    pub struct LocalStorageScoreStore;

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }

    impl ScoreStore for LocalStorageScoreStore {
        fn load(&mut self) -> Option<u64> {
            let Some(storage) = storage() else {
                log::warn!("LocalStorage unavailable, high score starts at 0");
                return None;
            };
            match storage.get_item(STORAGE_KEY) {
                Ok(Some(json)) => match serde_json::from_str::<u64>(&json) {
                    Ok(score) => {
                        log::info!("loaded high score {}", score);
                        Some(score)
                    }
                    Err(e) => {
                        log::warn!("corrupt high score entry ignored: {}", e);
                        None
                    }
                },
                _ => None,
            }
        }

        fn save(&mut self, score: u64) {
            let Some(storage) = storage() else {
                log::warn!("LocalStorage unavailable, high score not saved");
                return;
            };
            match serde_json::to_string(&score) {
                Ok(json) => {
                    if storage.set_item(STORAGE_KEY, &json).is_err() {
                        log::warn!("failed to persist high score");
                    }
                }
                Err(e) => log::warn!("failed to encode high score: {}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryScoreStore::default();
        assert_eq!(store.load(), None);
        store.save(1234);
        assert_eq!(store.load(), Some(1234));
    }
}
