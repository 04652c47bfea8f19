// tests/support/mocks.rs
use async_trait::async_trait;
use outcome_core::application::ports::chance::Chance;
use outcome_core::domain::configuration::{Configuration, ConfigurationStore};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Always rolls the same face.
pub struct FixedChance(pub u32);

impl Chance for FixedChance {
    fn roll(&self, sides: u32) -> u32 {
        self.0.min(sides.saturating_sub(1))
    }
}

/// Rolls a scripted sequence, then zeros.
pub struct ScriptedChance {
    faces: Mutex<VecDeque<u32>>,
}

impl ScriptedChance {
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: Mutex::new(faces.into_iter().collect()),
        }
    }
}

impl Chance for ScriptedChance {
    fn roll(&self, _sides: u32) -> u32 {
        self.faces.lock().unwrap().pop_front().unwrap_or(0)
    }
}

/// Store with fixed answers that remembers what it was asked to save.
pub struct RecordingStore {
    pub existing_key: Option<String>,
    pub accept_saves: bool,
    pub saved: Mutex<Vec<Configuration>>,
}

impl RecordingStore {
    pub fn accepting() -> Self {
        Self {
            existing_key: None,
            accept_saves: true,
            saved: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            accept_saves: false,
            ..Self::accepting()
        }
    }

    pub fn with_existing_key(key: &str) -> Self {
        Self {
            existing_key: Some(key.to_string()),
            ..Self::accepting()
        }
    }

    pub fn saved_keys(&self) -> Vec<String> {
        self.saved
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.key.clone())
            .collect()
    }
}

#[async_trait]
impl ConfigurationStore for RecordingStore {
    async fn key_exists(&self, key: &str) -> bool {
        self.existing_key.as_deref() == Some(key)
    }

    async fn save(&self, configuration: &Configuration) -> bool {
        self.saved.lock().unwrap().push(configuration.clone());
        self.accept_saves
    }
}
