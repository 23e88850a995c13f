//! Access token issuance and verification (HS256 JWT)

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use estate_shared::config::JwtConfig;

use crate::errors::{DomainError, DomainResult};

/// JWT claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id
    pub sub: String,
    /// Issuer
    pub iss: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    /// Parse the subject claim back into a user id
    pub fn user_id(&self) -> DomainResult<Uuid> {
        Uuid::parse_str(&self.sub)
            .map_err(|_| DomainError::forbidden("Invalid token subject"))
    }
}

/// Issues and verifies HS256 access tokens
#[derive(Clone)]
pub struct AccessTokenIssuer {
    config: JwtConfig,
}

impl AccessTokenIssuer {
    /// Create a new issuer from JWT configuration
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// Issue a token for the given user
    pub fn issue(&self, user_id: Uuid) -> DomainResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iss: self.config.issuer.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.config.access_token_expiry)).timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.secret.as_bytes()),
        )
        .map_err(|e| DomainError::internal(format!("Failed to sign access token: {}", e)))
    }

    /// Verify a token and return its claims
    pub fn verify(&self, token: &str) -> DomainResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| DomainError::forbidden("Invalid or expired token"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> AccessTokenIssuer {
        AccessTokenIssuer::new(JwtConfig::new("unit-test-secret"))
    }

    #[test]
    fn test_issue_verify_round_trip() {
        let user_id = Uuid::new_v4();
        let token = issuer().issue(user_id).unwrap();

        let claims = issuer().verify(&token).unwrap();
        assert_eq!(claims.user_id().unwrap(), user_id);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = issuer().issue(Uuid::new_v4()).unwrap();
        let other = AccessTokenIssuer::new(JwtConfig::new("different-secret"));
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(issuer().verify("not.a.token").is_err());
    }
}
