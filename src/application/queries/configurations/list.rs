use super::ConfigurationQueryService;
use crate::{
    application::dto::ConfigurationResponse,
    domain::{
        configuration::{Configuration, ConfigurationId},
        outcome::{Outcome, Succeed},
    },
};

impl ConfigurationQueryService {
    pub async fn list_configurations(&self) -> Outcome<Vec<ConfigurationResponse>> {
        self.timing
            .bounded(async {
                let configurations = vec![
                    Configuration::new(ConfigurationId::generate(), "Key1", "Value1", "Description1"),
                    Configuration::new(ConfigurationId::generate(), "Key2", "Value2", "Description2"),
                ];
                self.timing.pause().await;

                configurations.succeed().map(|configurations| {
                    configurations
                        .into_iter()
                        .map(ConfigurationResponse::from)
                        .collect::<Vec<_>>()
                })
            })
            .await
    }
}
