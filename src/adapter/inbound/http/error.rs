//! Mapping from crate errors to HTTP responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

use super::dto::ErrorResponse;
use crate::domain::DomainError;
use crate::error::Error;

/// Fixed message for any failure past input validation.
pub const GENERATION_FAILED: &str = "Model generation failed";
/// Message for a body that is not a chat request.
pub const INVALID_BODY: &str = "Invalid request body";

/// Error returned by HTTP handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Input failed domain validation. Responds 400 with the domain message.
    Invalid(DomainError),
    /// The body could not be read as JSON of the expected shape.
    Body(JsonRejection),
    /// `message` held a truthy value that is not a string. Responds 422.
    NotText,
    /// Anything that went wrong while producing a reply. Responds 500; the
    /// cause is logged and never sent to the client.
    Generation(Error),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Domain(domain) => Self::Invalid(domain),
            other => Self::Generation(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Invalid(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::Body(rejection) => {
                warn!(reason = %rejection.body_text(), "Rejected request body");
                (rejection.status(), INVALID_BODY.to_string())
            }
            Self::NotText => {
                warn!("Rejected non-string message");
                (StatusCode::UNPROCESSABLE_ENTITY, INVALID_BODY.to_string())
            }
            Self::Generation(err) => {
                error!(error = %err, "Model generation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILED.to_string())
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;

    #[test]
    fn domain_errors_are_bad_requests() {
        let response = ApiError::from(Error::Domain(DomainError::EmptyMessage)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn non_string_message_is_unprocessable() {
        let response = ApiError::NotText.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn model_errors_are_internal() {
        let err = Error::Model(ModelError::Tokenizer("bad merges".into()));
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
