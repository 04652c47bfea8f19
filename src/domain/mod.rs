// src/domain/mod.rs
pub mod configuration;
pub mod outcome;
