use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum JwtError {
    #[error("token encode failed")]
    Encode(#[source] jsonwebtoken::errors::Error),

    #[error("token expired")]
    Expired,

    #[error("token decode/validation failed")]
    Decode(#[source] jsonwebtoken::errors::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub(crate) struct Claims {
    pub(crate) user_id: i64,
    pub(crate) username: String,
    pub(crate) iat: i64,
    pub(crate) exp: i64,
}

pub(crate) struct JwtService {
    secret: String,
    ttl_seconds: i64,
}

impl JwtService {
    const DEFAULT_TTL_SECONDS: i64 = 24 * 60 * 60;
    const LEEWAY_SECONDS: u64 = 10;

    pub(crate) fn new(secret: &str, ttl_seconds: i64) -> Self {
        let ttl_seconds = if ttl_seconds > 0 {
            ttl_seconds
        } else {
            Self::DEFAULT_TTL_SECONDS
        };

        JwtService {
            secret: secret.into(),
            ttl_seconds,
        }
    }

    pub(crate) fn generate_token(&self, user_id: i64, username: &str) -> Result<String, JwtError> {
        let now = Utc::now();

        let claims = Claims {
            user_id,
            username: username.into(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.ttl_seconds)).timestamp(),
        };

        self.encode_claims(&claims)
    }

    pub(crate) fn encode_claims(&self, claims: &Claims) -> Result<String, JwtError> {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(JwtError::Encode)
    }

    pub(crate) fn verify_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = Self::LEEWAY_SECONDS;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => JwtError::Expired,
            _ => JwtError::Decode(e),
        })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::{Claims, JwtError, JwtService};

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn generated_token_round_trips_claims() {
        let jwt = JwtService::new(SECRET, 3600);
        let token = jwt.generate_token(7, "root").expect("token must be issued");

        let claims = jwt.verify_token(&token).expect("token must verify");
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.username, "root");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = JwtService::new("another-secret-another-secret-0000", 3600);
        let token = issuer.generate_token(7, "root").expect("token must be issued");

        let err = JwtService::new(SECRET, 3600)
            .verify_token(&token)
            .expect_err("foreign signature must fail");
        assert!(matches!(err, JwtError::Decode(_)));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let err = JwtService::new(SECRET, 3600)
            .verify_token("not-a-jwt")
            .expect_err("garbage must fail");
        assert!(matches!(err, JwtError::Decode(_)));
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let jwt = JwtService::new(SECRET, 3600);
        let issued = Utc::now().timestamp() - 7200;
        let token = jwt
            .encode_claims(&Claims {
                user_id: 7,
                username: "root".to_string(),
                iat: issued,
                exp: issued + 60,
            })
            .expect("token must be issued");

        let err = jwt.verify_token(&token).expect_err("token must be expired");
        assert!(matches!(err, JwtError::Expired));
    }

    #[test]
    fn non_positive_ttl_falls_back_to_default() {
        let jwt = JwtService::new(SECRET, 0);
        let token = jwt.generate_token(1, "root").expect("token must be issued");
        let claims = jwt.verify_token(&token).expect("token must verify");
        assert_eq!(claims.exp - claims.iat, JwtService::DEFAULT_TTL_SECONDS);
    }
}
