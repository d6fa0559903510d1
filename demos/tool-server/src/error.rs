use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use deckofcards_sdk::{DeckError, ErrorKind};
use serde_json::json;

/// Unified error type that renders as a JSON `{"error": "..."}` response
/// with an appropriate HTTP status code.
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn bad_gateway(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: msg.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<DeckError> for AppError {
    fn from(e: DeckError) -> Self {
        match e.kind() {
            ErrorKind::InvalidArgument => AppError::bad_request(e.to_string()),
            ErrorKind::RemoteUnavailable | ErrorKind::RemoteProtocolError => {
                AppError::bad_gateway(e.to_string())
            }
        }
    }
}
