// src/jwt/jwt_helper.rs
use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::Result as JwtResult, DecodingKey, EncodingKey, Header, Validation,
};

use crate::jwt::claims::Claims;

/// Tokens are valid for one hour and are never refreshed.
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// Signing and verification keys derived from the process-wide secret.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenKeys {
    pub fn new(secret: &[u8]) -> Self {
        TokenKeys {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation: Validation::default(),
        }
    }

    pub fn create_token(&self, email: &str) -> JwtResult<String> {
        self.create_token_at(email, Utc::now().timestamp())
    }

    /// Issues a token as if the clock read `issued_at` (unix seconds).
    pub fn create_token_at(&self, email: &str, issued_at: i64) -> JwtResult<String> {
        let claims = Claims {
            email: email.to_string(),
            iat: issued_at.max(0) as usize,
            exp: (issued_at + TOKEN_TTL_SECS).max(0) as usize,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Checks signature and expiry.
    pub fn verify_token(&self, token: &str) -> JwtResult<Claims> {
        decode::<Claims>(token, &self.decoding, &self.validation).map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;

    #[test]
    fn issued_token_carries_email_and_one_hour_expiry() {
        let keys = TokenKeys::new(b"marketplace-secret");
        let token = keys.create_token("seller@example.com").unwrap();

        let claims = keys.verify_token(&token).unwrap();
        assert_eq!(claims.email, "seller@example.com");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS as usize);
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let token = TokenKeys::new(b"first-secret")
            .create_token("buyer@example.com")
            .unwrap();

        let err = TokenKeys::new(b"second-secret").verify_token(&token).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidSignature));
    }

    #[test]
    fn token_older_than_an_hour_is_rejected() {
        let keys = TokenKeys::new(b"marketplace-secret");
        let two_hours_ago = Utc::now().timestamp() - 2 * TOKEN_TTL_SECS;
        let token = keys.create_token_at("buyer@example.com", two_hours_ago).unwrap();

        let err = keys.verify_token(&token).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ExpiredSignature));
    }

    #[test]
    fn garbage_is_rejected() {
        let keys = TokenKeys::new(b"marketplace-secret");
        assert!(keys.verify_token("not.a.token").is_err());
        assert!(keys.verify_token("").is_err());
    }
}
