use anyhow::{Context, Result};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::entities::sea_orm_active_enums::RoleEnum;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User id as a string
    pub sub: String,
    pub name: String,
    pub role: RoleEnum,
    pub exp: i64,
    pub iat: i64,
}

pub fn create_token(
    secret: &str,
    user_id: &str,
    name: &str,
    role: RoleEnum,
    expires_in: i64,
) -> Result<String> {
    let now = Utc::now().timestamp();
    let claims = TokenClaims {
        sub: user_id.to_string(),
        name: name.to_string(),
        role,
        exp: now + expires_in,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to sign JWT")
}

pub fn verify_token(secret: &str, token: &str) -> Result<TokenClaims> {
    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Invalid or expired token")?;

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_claims() {
        let token = create_token("secret", "user-1", "Jane Doe", RoleEnum::Teacher, 3600).unwrap();
        let claims = verify_token("secret", &token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.role, RoleEnum::Teacher);
    }

    #[test]
    fn rejects_wrong_secret() {
        let token = create_token("secret", "user-1", "Jane Doe", RoleEnum::Student, 3600).unwrap();
        assert!(verify_token("other", &token).is_err());
    }
}
