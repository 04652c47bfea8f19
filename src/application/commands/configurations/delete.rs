use super::ConfigurationCommandService;
use crate::domain::{
    configuration::{Configuration, ConfigurationErrors, ConfigurationId},
    outcome::{Error, UnitOutcome},
};

pub struct DeleteConfigurationCommand {
    pub id: String,
}

impl ConfigurationCommandService {
    /// Removes a configuration; the simulated lookup hits half of the time.
    pub async fn delete_configuration(&self, command: DeleteConfigurationCommand) -> UnitOutcome {
        self.timing
            .bounded(async { UnitOutcome::from(self.delete(command).await) })
            .await
    }

    async fn delete(&self, command: DeleteConfigurationCommand) -> Result<(), Error> {
        let id = ConfigurationId::parse(&command.id).into_result()?;

        let found = (self.chance.roll(2) == 0)
            .then(|| Configuration::new(id, "Key1", "Value1", "Description1"));
        self.timing.pause().await;

        let configuration = found.ok_or_else(|| ConfigurationErrors::not_found(id))?;
        if !self.store.save(&configuration).await {
            return Err(ConfigurationErrors::delete_failure());
        }

        tracing::info!(%id, "configuration deleted");
        Ok(())
    }
}
