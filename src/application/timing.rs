// src/application/timing.rs
use crate::domain::{
    configuration::ConfigurationErrors,
    outcome::Outcome,
};
use std::{future::Future, time::Duration};

/// Simulated per-step latency and the deadline an entire operation must meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub latency: Duration,
    pub deadline: Duration,
}

impl Timing {
    pub fn new(latency: Duration, deadline: Duration) -> Self {
        Self { latency, deadline }
    }

    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::from_secs(30))
    }

    pub async fn pause(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// Runs `operation`, reporting a `Failure`-kind error if it overruns the deadline.
    pub async fn bounded<T>(&self, operation: impl Future<Output = Outcome<T>>) -> Outcome<T> {
        match tokio::time::timeout(self.deadline, operation).await {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::warn!(deadline_ms = self.deadline.as_millis() as u64, "operation cancelled");
                ConfigurationErrors::cancelled().into()
            }
        }
    }
}
