use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::FolioError;

// ---------------------------------------------------------------------------
// AppError: unified error type for HTTP responses
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if let Some(e) = self.0.downcast_ref::<FolioError>() {
            match e {
                FolioError::UnknownField(_)
                | FolioError::UnknownStep(_)
                | FolioError::UnknownChannel(_)
                | FolioError::UnknownOption { .. } => StatusCode::BAD_REQUEST,
                FolioError::Clipboard(_) => StatusCode::SERVICE_UNAVAILABLE,
                FolioError::InvalidConfig(_) | FolioError::Io(_) | FolioError::Yaml(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status.is_server_error() {
            tracing::error!("request failed: {:#}", self.0);
        }

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
