// src/application/ports/mod.rs
pub mod chance;

pub type ChancePort = dyn chance::Chance;
