use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::Request;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

pub type Result<T> = std::result::Result<T, ApiError>;

/// Every way a request can fail.
///
/// Absent records are not an error: lookups simply return empty results.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No `Authorization` header on a guarded route.
    #[error("unauthorized access")]
    Unauthenticated,

    /// Bad or expired token, or a token whose email does not match the
    /// email the caller asked about.
    #[error("forbidden access")]
    Forbidden,

    #[error("invalid document id `{0}`")]
    InvalidId(String),

    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::Unauthenticated => Status::Unauthorized,
            ApiError::Forbidden => Status::Forbidden,
            // Malformed ids surface as a server error, like store failures.
            ApiError::InvalidId(_)
            | ApiError::Database(_)
            | ApiError::Token(_)
            | ApiError::Internal(_) => Status::InternalServerError,
        }
    }

    /// Text sent back to the client. Server-side details stay in the logs.
    pub fn public_message(&self) -> String {
        if self.status().code >= 500 {
            "internal server error".to_string()
        } else {
            self.to_string()
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        if status.code >= 500 {
            error!(error = %self, method = %request.method(), uri = %request.uri(), "request failed");
        } else {
            warn!(error = %self, method = %request.method(), uri = %request.uri(), "request rejected");
        }

        (status, Json(json!({ "message": self.public_message() }))).respond_to(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_failures_map_to_client_statuses() {
        assert_eq!(ApiError::Unauthenticated.status(), Status::Unauthorized);
        assert_eq!(ApiError::Forbidden.status(), Status::Forbidden);
        assert_eq!(ApiError::Forbidden.public_message(), "forbidden access");
    }

    #[test]
    fn server_failures_hide_details() {
        let err = ApiError::InvalidId("not-an-id".into());
        assert_eq!(err.status(), Status::InternalServerError);
        assert_eq!(err.public_message(), "internal server error");

        let err = ApiError::Internal("token keys missing".into());
        assert_eq!(err.public_message(), "internal server error");
    }
}
