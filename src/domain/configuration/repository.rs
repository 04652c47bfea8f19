// src/domain/configuration/repository.rs
use super::entity::Configuration;
use async_trait::async_trait;

/// Persistence seam for configurations.
///
/// Answers are plain booleans: the service turns them into domain errors.
#[async_trait]
pub trait ConfigurationStore: Send + Sync {
    async fn key_exists(&self, key: &str) -> bool;
    async fn save(&self, configuration: &Configuration) -> bool;
}
