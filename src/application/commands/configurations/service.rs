use std::sync::Arc;

use crate::{
    application::{ports::ChancePort, timing::Timing},
    domain::configuration::ConfigurationStore,
};

pub struct ConfigurationCommandService {
    pub(super) store: Arc<dyn ConfigurationStore>,
    pub(super) chance: Arc<ChancePort>,
    pub(super) timing: Timing,
}

impl ConfigurationCommandService {
    pub fn new(store: Arc<dyn ConfigurationStore>, chance: Arc<ChancePort>, timing: Timing) -> Self {
        Self {
            store,
            chance,
            timing,
        }
    }
}
