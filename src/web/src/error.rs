use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use database::DatabaseError;
use league_core::league::LeagueError;
use serde_json::json;

/// Custom error type for API handlers
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    InternalError(String),
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<LeagueError> for ApiError {
    fn from(err: LeagueError) -> Self {
        match err {
            LeagueError::TeamNotFound(_) | LeagueError::FixtureNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            LeagueError::EmptyName
            | LeagueError::DuplicateTeamName(_)
            | LeagueError::DuplicateTeamId(_)
            | LeagueError::DuplicateFixtureId(_)
            | LeagueError::IdsExhausted
            | LeagueError::Validation(_) => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        ApiError::InternalError(format!("Snapshot error: {}", err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Helper type for handler results
pub type ApiResult<T> = Result<T, ApiError>;
