// src/application/commands/configurations/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateConfigurationCommand;
pub use delete::DeleteConfigurationCommand;
pub use service::ConfigurationCommandService;
pub use update::UpdateConfigurationCommand;
