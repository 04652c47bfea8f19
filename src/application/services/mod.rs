// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::configurations::ConfigurationCommandService,
        ports::ChancePort,
        queries::configurations::ConfigurationQueryService,
        timing::Timing,
    },
    domain::configuration::ConfigurationStore,
};

pub struct ApplicationServices {
    pub configuration_commands: Arc<ConfigurationCommandService>,
    pub configuration_queries: Arc<ConfigurationQueryService>,
}

impl ApplicationServices {
    pub fn new(
        configuration_store: Arc<dyn ConfigurationStore>,
        chance: Arc<ChancePort>,
        timing: Timing,
    ) -> Self {
        let configuration_commands = Arc::new(ConfigurationCommandService::new(
            Arc::clone(&configuration_store),
            Arc::clone(&chance),
            timing,
        ));
        let configuration_queries =
            Arc::new(ConfigurationQueryService::new(Arc::clone(&chance), timing));

        Self {
            configuration_commands,
            configuration_queries,
        }
    }
}
