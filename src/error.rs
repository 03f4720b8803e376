//! Error handling for the application
//!
//! The pricing engine itself never fails; these errors belong to the HTTP
//! layer that sits in front of it.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::responses::PricingErrorResponse;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {message}")]
    InvalidRequest {
        message: String,
        errors: Vec<String>,
    },

    /// Body axum could not extract; keeps axum's status (400, 415, 422, ...)
    #[error("Unreadable request body: {message}")]
    UnreadableBody { status: StatusCode, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Request that failed boundary checks
    pub fn invalid(errors: Vec<String>) -> Self {
        AppError::InvalidRequest {
            message: format!("{} validation error(s)", errors.len()),
            errors,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::UnreadableBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(format!("Pricing task failed: {}", err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::InvalidRequest { message, errors } => {
                tracing::warn!("Rejected pricing request: {}", message);
                (
                    StatusCode::BAD_REQUEST,
                    PricingErrorResponse {
                        error_type: "invalid_request".to_string(),
                        message: message.clone(),
                        details: (!errors.is_empty()).then(|| serde_json::json!(errors)),
                    },
                )
            }
            AppError::UnreadableBody { status, message } => {
                tracing::warn!("Unreadable pricing request: {}", message);
                (
                    *status,
                    PricingErrorResponse {
                        error_type: "invalid_request".to_string(),
                        message: message.clone(),
                        details: None,
                    },
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    PricingErrorResponse {
                        error_type: "internal".to_string(),
                        message: "Internal error".to_string(),
                        details: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::invalid(vec!["a".to_string(), "b".to_string()]);
        assert!(err.to_string().contains("2 validation error(s)"));

        let err = AppError::Internal("boom".to_string());
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_app_error_status_codes() {
        let response = AppError::invalid(vec!["bad".to_string()]).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = AppError::UnreadableBody {
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            message: "Expected request with `Content-Type: application/json`".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_panicked_task_maps_to_internal() {
        let join_err = tokio::task::spawn_blocking(|| panic!("walk failed"))
            .await
            .unwrap_err();
        let err = AppError::from(join_err);
        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
