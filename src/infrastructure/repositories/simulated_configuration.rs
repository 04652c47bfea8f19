// src/infrastructure/repositories/simulated_configuration.rs
use crate::domain::configuration::{Configuration, ConfigurationStore};
use async_trait::async_trait;
use std::time::Duration;

/// Key that the simulated store reports as already taken.
pub const TAKEN_KEY: &str = "Test";
/// Only saves of this key succeed.
pub const SAVABLE_KEY: &str = "Test1";

/// Store stand-in without real storage: answers are derived from the key and
/// every call waits out a fixed latency.
#[derive(Debug, Clone, Default)]
pub struct SimulatedConfigurationStore {
    latency: Duration,
}

impl SimulatedConfigurationStore {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    async fn wait(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl ConfigurationStore for SimulatedConfigurationStore {
    async fn key_exists(&self, key: &str) -> bool {
        self.wait().await;
        key == TAKEN_KEY
    }

    async fn save(&self, configuration: &Configuration) -> bool {
        self.wait().await;
        let saved = configuration.key == SAVABLE_KEY;
        tracing::debug!(key = %configuration.key, saved, "simulated save");
        saved
    }
}
