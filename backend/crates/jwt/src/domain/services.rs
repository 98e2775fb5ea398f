//! Token Service
//!
//! Signs and parses lesson access tokens with one shared HS512 secret.
//! Parsing separates tokens that are merely expired (signature verified,
//! claims readable) from tokens whose claims must not be trusted at all.

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::domain::claims::LessonClaims;
use crate::error::JwtResult;

const ALGORITHM: Algorithm = Algorithm::HS512;

/// Outcome of parsing an access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenParse {
    /// Signature and expiry verified
    Valid(LessonClaims),
    /// Signature verified but `exp` is in the past
    Expired {
        claims: LessonClaims,
        message: String,
    },
    /// Claims are untrusted; carries the reason
    Invalid(String),
}

/// HS512 access token service
#[derive(Clone)]
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtTokenService {
    pub fn new(signing_key: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(signing_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(signing_key.as_bytes()),
            ttl,
        }
    }

    /// Mint a token for `user` issued now
    pub fn create_token(&self, user: &str) -> JwtResult<String> {
        self.create_token_at(user, Utc::now())
    }

    /// Mint a token for `user` issued at `issued_at`
    pub fn create_token_at(&self, user: &str, issued_at: DateTime<Utc>) -> JwtResult<String> {
        let iat = issued_at.timestamp();
        let exp = iat + self.ttl.as_secs() as i64;
        let claims = LessonClaims::new(user, iat, exp);

        Ok(encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)?)
    }

    /// Verify a token and classify the result
    pub fn parse_token(&self, token: &str) -> TokenParse {
        let validation = Self::validation();

        match decode::<LessonClaims>(token, &self.decoding_key, &validation) {
            Ok(data) => TokenParse::Valid(data.claims),
            Err(e) if matches!(e.kind(), JwtErrorKind::ExpiredSignature) => {
                // Signature is fine; read the claims without the expiry check
                let mut lenient = validation;
                lenient.validate_exp = false;
                match decode::<LessonClaims>(token, &self.decoding_key, &lenient) {
                    Ok(data) => {
                        let message = expired_message(data.claims.exp, Utc::now());
                        TokenParse::Expired {
                            claims: data.claims,
                            message,
                        }
                    }
                    Err(e) => TokenParse::Invalid(e.to_string()),
                }
            }
            Err(e) => TokenParse::Invalid(e.to_string()),
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;
        validation
    }
}

fn expired_message(exp: i64, now: DateTime<Utc>) -> String {
    let expired_at = Utc
        .timestamp_opt(exp, 0)
        .single()
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| exp.to_string());
    let difference_ms = now.timestamp_millis() - exp.saturating_mul(1000);

    format!(
        "JWT expired at {expired_at}. Current time: {}, a difference of {difference_ms} milliseconds.",
        now.to_rfc3339()
    )
}
