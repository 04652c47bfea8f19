// src/domain/outcome/mod.rs
mod error;
#[allow(clippy::module_inception)]
mod outcome;

pub use error::{Error, ErrorKind};
pub use outcome::{Outcome, Succeed, UnitOutcome};
