// src/presentation/console.rs
//! One-line text rendering of outcomes for the console demo.
use crate::domain::outcome::Outcome;
use serde::Serialize;

/// `"<succeeded>, <detail>"`, where the detail is `on_success(value)` or the
/// error's wire form.
pub fn describe<T>(
    outcome: Outcome<T>,
    on_success: impl FnOnce(T) -> serde_json::Result<String>,
) -> serde_json::Result<String> {
    let succeeded = outcome.is_success();
    let detail = outcome.match_with(on_success, |err| serde_json::to_string(&err))?;
    Ok(format!("{succeeded}, {detail}"))
}

pub fn as_json<T: Serialize>(value: T) -> serde_json::Result<String> {
    serde_json::to_string(&value)
}

#[allow(clippy::unnecessary_wraps)]
pub fn no_content(_: ()) -> serde_json::Result<String> {
    Ok(String::from("No Content"))
}
