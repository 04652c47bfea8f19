// src/domain/outcome/error.rs
use serde::Serialize;
use std::fmt;
use thiserror::Error as ThisError;

/// Category of an expected failure.
///
/// Producers only say *what* went wrong; the HTTP boundary decides how each
/// kind is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    Failure,
    NotFound,
    Validation,
    Conflict,
    Unauthorized,
    Forbidden,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Failure => "failure",
            Self::NotFound => "not_found",
            Self::Validation => "validation",
            Self::Conflict => "conflict",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An expected, categorised failure.
///
/// Only the per-kind factories can build one, so every error names its kind.
/// Fields are fixed at construction. The wire form carries `code` and
/// `description`; `kind` stays internal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, ThisError, Serialize)]
#[error("{code}: {description}")]
pub struct Error {
    code: String,
    description: String,
    #[serde(skip)]
    kind: ErrorKind,
}

impl Error {
    fn new(code: impl Into<String>, description: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            kind,
        }
    }

    pub fn failure(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(code, description, ErrorKind::Failure)
    }

    pub fn not_found(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(code, description, ErrorKind::NotFound)
    }

    pub fn validation(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(code, description, ErrorKind::Validation)
    }

    pub fn conflict(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(code, description, ErrorKind::Conflict)
    }

    pub fn unauthorized(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(code, description, ErrorKind::Unauthorized)
    }

    pub fn forbidden(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(code, description, ErrorKind::Forbidden)
    }

    /// Stable identifier meant for branching and logs.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}
