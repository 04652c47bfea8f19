// src/domain/configuration/value_objects.rs
use crate::domain::outcome::{Error, Outcome};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigurationId(Uuid);

impl ConfigurationId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Outcome<Self> {
        match Uuid::parse_str(raw.trim()) {
            Ok(id) => Outcome::Success(Self(id)),
            Err(_) => Error::validation(
                "Configurations.InvalidId",
                format!("'{raw}' is not a valid configuration id"),
            )
            .into(),
        }
    }
}

impl fmt::Display for ConfigurationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
