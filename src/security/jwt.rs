use crate::api::config::Config;
use crate::security::errors::AuthError;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Issues and checks the signed session tokens handed out at login.
#[derive(Clone)]
pub struct JwtService {
    secret: String,
    expiration_minutes: u64,
}

impl JwtService {
    pub fn new(config: &Config) -> Self {
        JwtService {
            secret: config.jwt_secret.clone(),
            expiration_minutes: config.jwt_expiration_minutes,
        }
    }

    pub fn generate_token(&self, account_id: i32) -> Result<String, AuthError> {
        let now = chrono::Utc::now().timestamp() as usize;
        let lifetime_secs = usize::try_from(self.expiration_minutes.saturating_mul(60))
            .unwrap_or(usize::MAX);

        let claims = AccessClaims {
            sub: account_id,
            iat: now,
            exp: now.saturating_add(lifetime_secs),
        };

        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!("Token encoding error: {:?}", e);
            AuthError::TokenCreationError
        })
    }

    /// Validates signature and expiry.
    pub fn decode_token(&self, token: &str) -> Result<AccessClaims, AuthError> {
        jsonwebtoken::decode::<AccessClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AccessClaims {
    /// Subject (account ID)
    pub sub: i32,
    /// Issued at (as UTC timestamp)
    pub iat: usize,
    /// Expiration time (as UTC timestamp)
    pub exp: usize,
}
