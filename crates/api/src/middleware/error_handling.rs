//! # Error Handling Middleware
//!
//! Maps [`ClinicError`] values onto HTTP status codes and JSON error bodies
//! so every endpoint reports failures the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use clinic_core::errors::ClinicError;
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// Handlers return `Result<_, AppError>`; the `From` impls below let them use
/// `?` on both `ClinicResult` and `eyre::Result`.
///
/// # Example
///
/// ```
/// use axum::Json;
/// use clinic_api::middleware::error_handling::AppError;
/// use clinic_core::errors::ClinicError;
///
/// async fn handler(count: i32) -> Result<Json<i32>, AppError> {
///     if count < 1 {
///         return Err(AppError(ClinicError::Validation("count must be positive".into())));
///     }
///     Ok(Json(count))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub ClinicError);

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            ClinicError::NotFound(_) => StatusCode::NOT_FOUND,
            ClinicError::Validation(_) => StatusCode::BAD_REQUEST,
            ClinicError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ClinicError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = ?self.0, "Request failed");
        }

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl From<ClinicError> for AppError {
    fn from(err: ClinicError) -> Self {
        AppError(err)
    }
}

/// Wraps the report in [`ClinicError::Database`], since repository
/// functions are the only source of bare `eyre` errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ClinicError::Database(err))
    }
}
