use super::ConfigurationQueryService;
use crate::{
    application::dto::ConfigurationResponse,
    domain::{
        configuration::{Configuration, ConfigurationErrors, ConfigurationId},
        outcome::{Error, Outcome},
    },
};

pub struct GetConfigurationByIdQuery {
    pub id: String,
}

impl ConfigurationQueryService {
    /// Finds a configuration; the simulated lookup hits half of the time.
    pub async fn get_configuration_by_id(
        &self,
        query: GetConfigurationByIdQuery,
    ) -> Outcome<ConfigurationResponse> {
        self.timing
            .bounded(async { Outcome::from(self.lookup(query).await) })
            .await
    }

    async fn lookup(&self, query: GetConfigurationByIdQuery) -> Result<ConfigurationResponse, Error> {
        let id = ConfigurationId::parse(&query.id).into_result()?;

        let found = (self.chance.roll(2) == 0)
            .then(|| Configuration::new(id, "Key1", "Value1", "Description1"));
        self.timing.pause().await;

        let configuration = found.ok_or_else(|| ConfigurationErrors::not_found(id))?;
        tracing::debug!(%id, "configuration found");
        Ok(configuration.into())
    }
}
