use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::APP_CONFIG;

/// Error taxonomy for the HTTP surface. Every handler maps its failures into
/// one of these variants at its own boundary; nothing below the routes layer
/// constructs HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or missing input, with field-level detail.
    Validation(Vec<FieldError>),
    /// Malformed input without field attribution (duplicate keys included,
    /// reported as 400 with a specific message like the rest of the API).
    BadRequest(String),
    /// Missing or invalid credential.
    Unauthorized(String),
    /// Access policy denial.
    Forbidden(String),
    NotFound(String),
    /// Anything else. The message is redacted outside local deployments.
    Internal(anyhow::Error),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct ValidationBody {
    errors: Vec<FieldError>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation(errors)
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ValidationBody { errors })).into_response()
            }
            Self::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { message, error: None }))
                    .into_response()
            }
            Self::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, Json(ErrorBody { message, error: None }))
                    .into_response()
            }
            Self::Forbidden(message) => {
                (StatusCode::FORBIDDEN, Json(ErrorBody { message, error: None })).into_response()
            }
            Self::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorBody { message, error: None })).into_response()
            }
            Self::Internal(err) => {
                tracing::error!(error = ?err, "Unhandled server error");
                let detail = if APP_CONFIG.app_env == "local" {
                    Some(format!("{err:#}"))
                } else {
                    None
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        message: "Server error".to_string(),
                        error: detail,
                    }),
                )
                    .into_response()
            }
        }
    }
}
