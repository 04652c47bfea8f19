// src/domain/configuration/entity.rs
use super::value_objects::ConfigurationId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub id: ConfigurationId,
    pub key: String,
    pub value: String,
    pub description: String,
}

impl Configuration {
    pub fn new(
        id: ConfigurationId,
        key: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            key: key.into(),
            value: value.into(),
            description: description.into(),
        }
    }
}
