// src/jwt/claims.rs
use serde::{Deserialize, Serialize};

/// Payload of an access token. The email is the only identity claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub iat: usize, // issued at, unix seconds
    pub exp: usize, // expiry, unix seconds
}
