// src/domain/configuration/errors.rs
use crate::domain::outcome::Error;
use std::fmt::Display;

/// Error catalogue for configuration operations.
pub struct ConfigurationErrors;

impl ConfigurationErrors {
    pub fn not_found(id: impl Display) -> Error {
        Error::not_found(
            "Configurations.NotFound",
            format!("Configuration with Id: {id} not found"),
        )
    }

    pub fn conflict(name: impl Display) -> Error {
        Error::conflict(
            "Configurations.Conflict",
            format!("Configuration with Name: {name} already exists"),
        )
    }

    pub fn create_failure() -> Error {
        Error::failure(
            "Configurations.CreateFailure",
            "Something went wrong in creating configuration",
        )
    }

    pub fn update_failure() -> Error {
        Error::failure(
            "Configurations.UpdateFailure",
            "Something went wrong in updating configuration",
        )
    }

    pub fn delete_failure() -> Error {
        Error::failure(
            "Configurations.DeleteFailure",
            "Something went wrong in deleting configuration",
        )
    }

    /// The operation ran past its deadline and was abandoned.
    pub fn cancelled() -> Error {
        Error::failure(
            "Configurations.Cancelled",
            "The configuration operation was cancelled before it completed",
        )
    }
}
