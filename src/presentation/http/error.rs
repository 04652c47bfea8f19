// src/presentation/http/error.rs
use crate::domain::outcome::{Error, ErrorKind, Outcome};
use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const PROBLEM_JSON: &str = "application/problem+json";

/// Transport status for each error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::Failure => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn problem_type(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "https://tools.ietf.org/html/rfc9110#section-15.5.1",
        StatusCode::UNAUTHORIZED => "https://tools.ietf.org/html/rfc9110#section-15.5.2",
        StatusCode::FORBIDDEN => "https://tools.ietf.org/html/rfc9110#section-15.5.4",
        StatusCode::NOT_FOUND => "https://tools.ietf.org/html/rfc9110#section-15.5.5",
        StatusCode::CONFLICT => "https://tools.ietf.org/html/rfc9110#section-15.5.10",
        _ => "https://tools.ietf.org/html/rfc9110#section-15.6.1",
    }
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    error: Error,
}

impl HttpError {
    pub fn from_error(error: Error) -> Self {
        let status = status_for(error.kind());
        if status.is_server_error() {
            tracing::error!(code = error.code(), kind = %error.kind(), "request failed");
        } else {
            tracing::warn!(code = error.code(), kind = %error.kind(), "request rejected");
        }
        Self { status, error }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = ProblemDetails {
            problem_type: problem_type(self.status).to_string(),
            title: self.error.description().to_string(),
            status: self.status.as_u16(),
            detail: self.error.code().to_string(),
        };
        (self.status, [(header::CONTENT_TYPE, PROBLEM_JSON)], Json(body)).into_response()
    }
}

/// RFC 7807 problem document. `title` carries the error description and
/// `detail` the error code.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttp<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttp<T> for Outcome<T> {
    fn into_http(self) -> HttpResult<T> {
        self.match_with(Ok, |err| Err(HttpError::from_error(err)))
    }
}
