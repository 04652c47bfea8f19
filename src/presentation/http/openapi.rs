// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::configurations::list_configurations,
        crate::presentation::http::controllers::configurations::get_configuration,
        crate::presentation::http::controllers::configurations::create_configuration,
        crate::presentation::http::controllers::configurations::update_configuration,
        crate::presentation::http::controllers::configurations::delete_configuration,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ProblemDetails,
            crate::presentation::http::controllers::configurations::CreateConfigurationRequest,
            crate::presentation::http::controllers::configurations::UpdateConfigurationRequest,
            crate::application::dto::ConfigurationResponse
        )
    ),
    tags(
        (name = "Configurations", description = "Configuration management endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Outcome API",
        description = "Configuration service whose operations report typed outcomes",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let redoc = Redoc::with_url("/redoc", ApiDoc::openapi());
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/redoc") }))
}

/// Writes the document to `OPENAPI_SNAPSHOT_PATH` (default
/// `docs/openapi.json`) and returns the path used.
pub fn write_openapi_snapshot() -> std::io::Result<PathBuf> {
    let output_path = env::var_os("OPENAPI_SNAPSHOT_PATH")
        .map_or_else(|| PathBuf::from("docs/openapi.json"), PathBuf::from);
    write_openapi_snapshot_to(&output_path)?;
    Ok(output_path)
}

pub fn write_openapi_snapshot_to(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_configuration_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/configurations"));
        assert!(paths.iter().any(|p| p.as_str() == "/configurations/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }

    #[test]
    fn snapshot_lands_at_the_requested_path() {
        let dir = env::temp_dir().join(format!("outcome-openapi-{}", uuid::Uuid::new_v4()));
        let path = dir.join("nested").join("openapi.json");

        write_openapi_snapshot_to(&path).unwrap();

        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert!(written["paths"].get("/configurations").is_some());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn problem_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.schemas.contains_key("ProblemDetails"));
        assert!(components.schemas.contains_key("ConfigurationResponse"));
    }
}
