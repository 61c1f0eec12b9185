use rocket::request::{FromRequest, Outcome, Request};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::jwt::{Claims, TokenKeys};

/// Identity proven by a valid bearer token.
///
/// Handlers that take an `AuthUser` only run once the token checked out;
/// a missing header ends the request with 401, a bad one with 403.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub email: String,
}

/// Verifies the raw `Authorization` header value (`Bearer <token>`).
pub fn authenticate(header: Option<&str>, keys: &TokenKeys) -> Result<Claims, ApiError> {
    let header = header.ok_or(ApiError::Unauthenticated)?;
    let token = header.split(' ').nth(1).unwrap_or_default();

    keys.verify_token(token).map_err(|err| {
        debug!(error = %err, "token verification failed");
        ApiError::Forbidden
    })
}

impl AuthUser {
    /// Owner check for routes that take an `email` query parameter: the
    /// caller may only ask about their own records.
    pub fn ensure_identity<'a>(&self, requested: Option<&'a str>) -> Result<&'a str, ApiError> {
        match requested {
            Some(email) if email == self.email => Ok(email),
            _ => {
                warn!(token_email = %self.email, requested = ?requested, "identity mismatch");
                Err(ApiError::Forbidden)
            }
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthUser {
    type Error = ApiError;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(keys) = request.rocket().state::<TokenKeys>() else {
            let err = ApiError::Internal("token keys are not managed".to_string());
            return Outcome::Error((err.status(), err));
        };

        match authenticate(request.headers().get_one("Authorization"), keys) {
            Ok(claims) => Outcome::Success(AuthUser { email: claims.email }),
            Err(err) => {
                warn!(uri = %request.uri(), status = err.status().code, "rejected bearer token");
                Outcome::Error((err.status(), err))
            }
        }
    }
}
