//! Bearer token issuance.
//!
//! Tokens are self-contained JWTs signed with the process-wide secret from
//! [`GlobalArgs`]. The server keeps no record of issued tokens; expiry is the
//! only thing that ends a token's validity.

use crate::cli::globals::GlobalArgs;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// Fixed token lifetime, one hour from issuance.
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Subject tag carried by every issued token.
pub const SUBJECT: &str = "user";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issue a signed token for a verified user.
/// # Errors
/// Returns an error if signing fails
pub fn issue(globals: &GlobalArgs, username: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let iat = Utc::now().timestamp();

    let claims = Claims {
        sub: SUBJECT.to_string(),
        username: username.to_string(),
        iat,
        exp: iat + TOKEN_TTL_SECS,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(globals.token_secret.expose_secret().as_bytes()),
    )
}

/// Decode a token and validate its signature and expiration.
/// # Errors
/// Returns an error if the token is malformed, expired or signed with a
/// different secret
pub fn decode_claims(
    globals: &GlobalArgs,
    token: &str,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(globals.token_secret.expose_secret().as_bytes()),
        &Validation::default(),
    )?;

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn test_globals(secret: &str) -> GlobalArgs {
        GlobalArgs::new(SecretString::from(secret.to_string()))
    }

    #[test]
    fn test_issue_returns_compact_jwt() {
        let globals = test_globals("sikreta");

        let token = issue(&globals, "alice").unwrap();

        assert!(!token.is_empty());
        assert_eq!(token.matches('.').count(), 2);
    }

    #[test]
    fn test_claims_carry_username_and_subject() {
        let globals = test_globals("sikreta");

        let token = issue(&globals, "alice").unwrap();
        let claims = decode_claims(&globals, &token).unwrap();

        assert_eq!(claims.sub, SUBJECT);
        assert_eq!(claims.username, "alice");
    }

    #[test]
    fn test_expiration_is_exactly_one_hour() {
        let globals = test_globals("sikreta");

        let token = issue(&globals, "alice").unwrap();
        let claims = decode_claims(&globals, &token).unwrap();

        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
        assert!(claims.iat <= Utc::now().timestamp());
    }

    #[test]
    fn test_wrong_secret_fails_validation() {
        let token = issue(&test_globals("sikreta"), "alice").unwrap();

        let result = decode_claims(&test_globals("alia-sikreta"), &token);

        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_token_fails_validation() {
        let globals = test_globals("sikreta");

        assert!(decode_claims(&globals, "invalid.token.here").is_err());
    }
}
