use lc_app::ClipboardServiceError;
use tracing::error;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::Reply;

/// A failed request: status code plus a plain-text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn invalid_json() -> Self {
        Self::bad_request("invalid JSON body")
    }

    /// Map a use case error. Storage details are logged, and the client
    /// only sees `storage_message`.
    pub fn from_service(err: ClipboardServiceError, storage_message: &str) -> Self {
        match err {
            ClipboardServiceError::InvalidArgument(msg) => Self::bad_request(msg),
            ClipboardServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ClipboardServiceError::Storage(detail) => {
                error!(error = %detail, "{storage_message}");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, storage_message)
            }
        }
    }
}

impl Reply for ApiError {
    fn into_response(self) -> Response {
        warp::reply::with_status(self.message, self.status).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status_codes() {
        let cases = [
            (
                ClipboardServiceError::InvalidArgument("text is required".into()),
                StatusCode::BAD_REQUEST,
                "text is required",
            ),
            (
                ClipboardServiceError::NotFound("clipboard is empty".into()),
                StatusCode::NOT_FOUND,
                "clipboard is empty",
            ),
            (
                ClipboardServiceError::Storage("disk I/O error".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to save clipboard",
            ),
        ];

        for (err, status, message) in cases {
            let api = ApiError::from_service(err, "failed to save clipboard");
            assert_eq!(api.status, status);
            assert_eq!(api.message, message);
        }
    }
}
