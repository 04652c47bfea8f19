use super::ConfigurationCommandService;
use crate::{
    application::dto::ConfigurationResponse,
    domain::{
        configuration::{Configuration, ConfigurationErrors, ConfigurationId},
        outcome::{Error, Outcome},
    },
};

#[derive(Debug, Clone)]
pub struct CreateConfigurationCommand {
    pub key: String,
    pub value: String,
    pub description: String,
}

impl ConfigurationCommandService {
    pub async fn create_configuration(
        &self,
        command: CreateConfigurationCommand,
    ) -> Outcome<ConfigurationResponse> {
        self.timing
            .bounded(async { Outcome::from(self.create(command).await) })
            .await
    }

    async fn create(&self, command: CreateConfigurationCommand) -> Result<ConfigurationResponse, Error> {
        if self.store.key_exists(&command.key).await {
            return Err(ConfigurationErrors::conflict(&command.key));
        }

        let configuration = Configuration::new(
            ConfigurationId::generate(),
            command.key,
            command.value,
            command.description,
        );

        if !self.store.save(&configuration).await {
            return Err(ConfigurationErrors::create_failure());
        }

        tracing::info!(id = %configuration.id, key = %configuration.key, "configuration created");
        Ok(configuration.into())
    }
}
