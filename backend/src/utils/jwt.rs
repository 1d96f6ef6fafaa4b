//! JWT token utilities for authentication.
//!
//! Provides token creation and verification for customer sessions. The
//! issuer is built once at startup from configuration and handed to the
//! handlers, rather than each call site reading ambient state.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::{ServiceError, ServiceResult};

/// JWT claims carried by every issued token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Customer ID
    pub sub: String,
    /// Token expiration timestamp
    pub exp: usize,
    /// Token issued at timestamp
    pub iat: usize,
}

/// Signs and verifies bearer tokens with a fixed secret and TTL.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_seconds: u64,
}

impl TokenIssuer {
    pub fn new(config: &Config) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        TokenIssuer {
            encoding_key,
            decoding_key,
            validation,
            ttl_seconds: config.jwt_expires_in_seconds,
        }
    }

    /// Issues a signed token for the given customer id, expiring after the
    /// configured TTL.
    pub fn issue(&self, subject: &str) -> ServiceResult<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.ttl_seconds as i64);

        let claims = Claims {
            sub: subject.to_string(),
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::internal(format!("token generation failed: {e}")))
    }

    /// Verifies and decodes a token. Fails when the signature is invalid,
    /// the token is structurally malformed, or the expiry has passed.
    pub fn verify(&self, token: &str) -> ServiceResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| ServiceError::invalid_token(e.to_string()))
    }

    /// Remaining lifetime of a freshly issued token, in seconds.
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(ttl: u64) -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout_seconds: 3,
            jwt_secret: "test-secret".to_string(),
            jwt_expires_in_seconds: ttl,
            server_port: 0,
        }
    }

    #[test]
    fn issue_then_verify_round_trip() {
        let issuer = TokenIssuer::new(&test_config(3600));

        let token = issuer.issue("customer-1").unwrap();
        let claims = issuer.verify(&token).unwrap();

        assert_eq!(claims.sub, "customer-1");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn verify_rejects_expired_token() {
        let issuer = TokenIssuer::new(&test_config(3600));

        // Encode claims whose expiry is already past the default leeway.
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: "customer-1".to_string(),
            exp: now - 120,
            iat: now - 3720,
        };
        let expired = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(
            issuer.verify(&expired),
            Err(ServiceError::InvalidToken { .. })
        ));
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let issuer = TokenIssuer::new(&test_config(3600));
        let mut other = test_config(3600);
        other.jwt_secret = "another-secret".to_string();
        let forger = TokenIssuer::new(&other);

        let forged = forger.issue("customer-1").unwrap();

        assert!(matches!(
            issuer.verify(&forged),
            Err(ServiceError::InvalidToken { .. })
        ));
    }

    #[test]
    fn verify_rejects_garbage() {
        let issuer = TokenIssuer::new(&test_config(3600));

        assert!(matches!(
            issuer.verify("not-a-jwt"),
            Err(ServiceError::InvalidToken { .. })
        ));
    }
}
