// src/application/dto/configurations.rs
use crate::domain::configuration::Configuration;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationResponse {
    pub id: String,
    pub key: String,
    pub value: String,
    pub description: String,
}

impl From<Configuration> for ConfigurationResponse {
    fn from(configuration: Configuration) -> Self {
        Self {
            id: configuration.id.to_string(),
            key: configuration.key,
            value: configuration.value,
            description: configuration.description,
        }
    }
}
