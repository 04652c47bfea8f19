use super::ConfigurationCommandService;
use crate::domain::{
    configuration::{Configuration, ConfigurationErrors, ConfigurationId},
    outcome::{Error, UnitOutcome},
};

#[derive(Debug, Clone)]
pub struct UpdateConfigurationCommand {
    pub id: String,
    pub key: String,
    pub value: String,
    pub description: String,
}

impl ConfigurationCommandService {
    /// Replaces a configuration; the simulated lookup misses one time in four.
    pub async fn update_configuration(&self, command: UpdateConfigurationCommand) -> UnitOutcome {
        self.timing
            .bounded(async { UnitOutcome::from(self.update(command).await) })
            .await
    }

    async fn update(&self, command: UpdateConfigurationCommand) -> Result<(), Error> {
        let id = ConfigurationId::parse(&command.id).into_result()?;

        let found = self.chance.roll(4) > 0;
        self.timing.pause().await;
        if !found {
            return Err(ConfigurationErrors::not_found(id));
        }

        let configuration =
            Configuration::new(id, command.key, command.value, command.description);
        if !self.store.save(&configuration).await {
            return Err(ConfigurationErrors::update_failure());
        }

        tracing::info!(%id, "configuration updated");
        Ok(())
    }
}
