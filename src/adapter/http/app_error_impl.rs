use crate::application::app_error::AppError;
use axum::extract::rejection::JsonRejection;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UserNotFound => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ProfileNotFound => StatusCode::NOT_FOUND,
            AppError::ProfileAlreadyExists => StatusCode::CONFLICT,
            AppError::InvalidId(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            // Well-formed JSON of the wrong shape is still a bad request; 422 is reserved for UserNotFound.
            AppError::InvalidJson(JsonRejection::JsonDataError(_)) => StatusCode::BAD_REQUEST,
            AppError::InvalidJson(rejection) => rejection.status(),
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        } else {
            match &self {
                AppError::InvalidJson(rejection) => rejection.body_text(),
                other => other.to_string(),
            }
        };

        let body = Json(ErrorResponse { error: message });

        (status, body).into_response()
    }
}
