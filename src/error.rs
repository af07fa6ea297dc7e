use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

pub type RequestId = u64;

/// Failures of the session, policy and request lifecycle operations.
///
/// `AuthFailure` and `InvalidInput` are meant for the user. The rest mean the
/// caller let through an action it should have prevented.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[display(fmt = "action not permitted")]
    Forbidden,
    #[display(fmt = "invalid {}: {}", field, reason)]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },
    #[display(fmt = "request {} not found", id)]
    NotFound { id: RequestId },
    #[display(fmt = "request {} has already been decided", id)]
    InvalidState { id: RequestId },
    #[display(fmt = "invalid credentials")]
    AuthFailure,
}

impl std::error::Error for CoreError {}

impl CoreError {
    pub fn missing(field: &'static str) -> Self {
        CoreError::InvalidInput {
            field,
            reason: "is required",
        }
    }

    pub fn malformed(field: &'static str) -> Self {
        CoreError::InvalidInput {
            field,
            reason: "is malformed",
        }
    }
}

impl ResponseError for CoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            CoreError::Forbidden => StatusCode::FORBIDDEN,
            CoreError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            CoreError::InvalidState { .. } => StatusCode::CONFLICT,
            CoreError::AuthFailure => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.to_string()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        assert_eq!(
            CoreError::missing("reason").to_string(),
            "invalid reason: is required"
        );
        assert_eq!(
            CoreError::InvalidState { id: 4 }.to_string(),
            "request 4 has already been decided"
        );
    }

    #[test]
    fn maps_to_http_status() {
        assert_eq!(CoreError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            CoreError::malformed("date").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CoreError::NotFound { id: 1 }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CoreError::InvalidState { id: 1 }.status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            CoreError::AuthFailure.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }
}
