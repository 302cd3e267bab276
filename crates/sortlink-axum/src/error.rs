use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sortlink_core::SortlinkError;

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if let Some(e) = self.0.downcast_ref::<SortlinkError>() {
            match e {
                SortlinkError::InvalidSortKey(_) | SortlinkError::InvalidDirection(_) => {
                    StatusCode::BAD_REQUEST
                }
                SortlinkError::Io(_) | SortlinkError::Yaml(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
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
