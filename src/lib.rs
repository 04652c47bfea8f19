//! Typed outcomes for operations with expected failures, and a small
//! configuration service built on them.
//!
//! The core lives in [`domain::outcome`]: an [`Error`](domain::outcome::Error)
//! tagged with a closed [`ErrorKind`](domain::outcome::ErrorKind), and a
//! single [`Outcome`](domain::outcome::Outcome) type that is either a success
//! (with or without a payload) or a failure. The HTTP layer maps error kinds
//! to status codes.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
