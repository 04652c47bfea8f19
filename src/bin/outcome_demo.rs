// src/bin/outcome_demo.rs
//! Walks through the common outcome shapes and prints how each one resolves.
use anyhow::Result;
use outcome_core::application::dto::ConfigurationResponse;
use outcome_core::domain::configuration::{Configuration, ConfigurationErrors, ConfigurationId};
use outcome_core::domain::outcome::{Outcome, Succeed, UnitOutcome};
use outcome_core::presentation::console::{as_json, describe, no_content};

fn get_by_id_with_success(id: ConfigurationId) -> Outcome<ConfigurationResponse> {
    ConfigurationResponse::from(Configuration::new(id, "Key", "Value", "Description")).succeed()
}

fn get_by_id_with_failure(id: ConfigurationId) -> Outcome<ConfigurationResponse> {
    ConfigurationErrors::not_found(id).into()
}

fn create_with_success() -> Outcome<ConfigurationResponse> {
    let configuration =
        Configuration::new(ConfigurationId::generate(), "Key", "Value", "Description");
    ConfigurationResponse::from(configuration).succeed()
}

fn create_with_failure() -> Outcome<ConfigurationResponse> {
    ConfigurationErrors::create_failure().into()
}

fn create_with_conflict_failure() -> Outcome<ConfigurationResponse> {
    ConfigurationErrors::conflict("Key").into()
}

fn update_with_success() -> UnitOutcome {
    UnitOutcome::completed()
}

fn update_with_failure() -> UnitOutcome {
    ConfigurationErrors::update_failure().into()
}

fn main() -> Result<()> {
    let lines = [
        (
            "GetByIdWithSuccess",
            describe(get_by_id_with_success(ConfigurationId::generate()), as_json)?,
        ),
        (
            "GetByIdWithFailure",
            describe(get_by_id_with_failure(ConfigurationId::generate()), as_json)?,
        ),
        ("CreateWithSuccess", describe(create_with_success(), as_json)?),
        ("CreateWithFailure", describe(create_with_failure(), as_json)?),
        (
            "CreateWithConflictFailure",
            describe(create_with_conflict_failure(), as_json)?,
        ),
        ("UpdateWithSuccess", describe(update_with_success(), no_content)?),
        ("UpdateWithFailure", describe(update_with_failure(), no_content)?),
    ];

    for (name, line) in lines {
        println!("{name}: {line}");
    }
    Ok(())
}
