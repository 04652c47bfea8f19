// src/application/ports/chance.rs

/// Source of randomness for the simulated data service.
pub trait Chance: Send + Sync {
    /// Returns a value in `0..sides`.
    fn roll(&self, sides: u32) -> u32;
}
