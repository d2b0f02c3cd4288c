//! HTTP error responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::domains::menu::MenuError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Menu(#[from] MenuError),

    /// Request body missing, not JSON, or not the expected shape.
    #[error("Invalid request body: {}", .0.body_text())]
    InvalidRequest(#[from] JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Menu(MenuError::DataAccess(_)) => StatusCode::BAD_REQUEST,
            ApiError::Menu(MenuError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Menu(MenuError::Collaborator(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Menu(MenuError::EmptyResponse) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidRequest(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %self, "Request rejected");
        }

        let body = Json(json!({
            "detail": self.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T, E = ApiError> = core::result::Result<T, E>;
