// src/infrastructure/mod.rs
pub mod chance;
pub mod repositories;
