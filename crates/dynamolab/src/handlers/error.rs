use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use dynamolab_core::storage::{repository_error_to_status_code, RepositoryError};

/// Application error type that wraps `anyhow::Error`.
///
/// Repository errors keep their own status code; anything else is a 500.
/// The body is the plain error message.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self.0.downcast_ref::<RepositoryError>() {
            Some(repo_error) => {
                let code = repository_error_to_status_code(repo_error);
                StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.0.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %message, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %message, "Request rejected");
        }

        (status, message).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Shorthand for a 400 caused by an unreadable request.
pub fn invalid_request(message: impl Into<String>) -> AppError {
    RepositoryError::InvalidData(message.into()).into()
}
