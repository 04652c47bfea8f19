// src/presentation/http/controllers/configurations.rs
use crate::application::{
    commands::configurations::{
        CreateConfigurationCommand, DeleteConfigurationCommand, UpdateConfigurationCommand,
    },
    dto::ConfigurationResponse,
    queries::configurations::GetConfigurationByIdQuery,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttp};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateConfigurationRequest {
    pub key: String,
    pub value: String,
    pub description: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConfigurationRequest {
    pub key: String,
    pub value: String,
    pub description: String,
}

#[utoipa::path(
    get,
    path = "/configurations",
    responses(
        (status = 200, description = "All configurations.", body = [ConfigurationResponse]),
        (status = 500, description = "Listing failed.", body = crate::presentation::http::error::ProblemDetails)
    ),
    tag = "Configurations"
)]
pub async fn list_configurations(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ConfigurationResponse>>> {
    state
        .services
        .configuration_queries
        .list_configurations()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/configurations/{id}",
    params(("id" = String, Path, description = "Configuration id (UUID)")),
    responses(
        (status = 200, description = "The configuration.", body = ConfigurationResponse),
        (status = 400, description = "Malformed id.", body = crate::presentation::http::error::ProblemDetails),
        (status = 404, description = "No such configuration.", body = crate::presentation::http::error::ProblemDetails)
    ),
    tag = "Configurations"
)]
pub async fn get_configuration(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ConfigurationResponse>> {
    state
        .services
        .configuration_queries
        .get_configuration_by_id(GetConfigurationByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/configurations",
    request_body = CreateConfigurationRequest,
    responses(
        (status = 201, description = "Configuration created.", body = ConfigurationResponse),
        (status = 409, description = "Key already taken.", body = crate::presentation::http::error::ProblemDetails),
        (status = 500, description = "Saving failed.", body = crate::presentation::http::error::ProblemDetails)
    ),
    tag = "Configurations"
)]
pub async fn create_configuration(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateConfigurationRequest>,
) -> Response {
    let command = CreateConfigurationCommand {
        key: payload.key,
        value: payload.value,
        description: payload.description,
    };

    state
        .services
        .configuration_commands
        .create_configuration(command)
        .await
        .match_with(
            |created| {
                let location = format!("/configurations/{}", created.id);
                (
                    StatusCode::CREATED,
                    [(header::LOCATION, location)],
                    Json(created),
                )
                    .into_response()
            },
            |err| HttpError::from_error(err).into_response(),
        )
}

#[utoipa::path(
    put,
    path = "/configurations/{id}",
    params(("id" = String, Path, description = "Configuration id (UUID)")),
    request_body = UpdateConfigurationRequest,
    responses(
        (status = 204, description = "Configuration updated."),
        (status = 404, description = "No such configuration.", body = crate::presentation::http::error::ProblemDetails),
        (status = 500, description = "Saving failed.", body = crate::presentation::http::error::ProblemDetails)
    ),
    tag = "Configurations"
)]
pub async fn update_configuration(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateConfigurationRequest>,
) -> HttpResult<StatusCode> {
    let command = UpdateConfigurationCommand {
        id,
        key: payload.key,
        value: payload.value,
        description: payload.description,
    };

    state
        .services
        .configuration_commands
        .update_configuration(command)
        .await
        .into_http()
        .map(|()| StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/configurations/{id}",
    params(("id" = String, Path, description = "Configuration id (UUID)")),
    responses(
        (status = 204, description = "Configuration deleted."),
        (status = 404, description = "No such configuration.", body = crate::presentation::http::error::ProblemDetails),
        (status = 500, description = "Deleting failed.", body = crate::presentation::http::error::ProblemDetails)
    ),
    tag = "Configurations"
)]
pub async fn delete_configuration(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .configuration_commands
        .delete_configuration(DeleteConfigurationCommand { id })
        .await
        .into_http()
        .map(|()| StatusCode::NO_CONTENT)
}
