use std::sync::Arc;

use crate::application::{ports::ChancePort, timing::Timing};

pub struct ConfigurationQueryService {
    pub(super) chance: Arc<ChancePort>,
    pub(super) timing: Timing,
}

impl ConfigurationQueryService {
    pub fn new(chance: Arc<ChancePort>, timing: Timing) -> Self {
        Self { chance, timing }
    }
}
