//! Bearer-token extractor turning a JWT into the authenticated actor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use crate::access::Actor;
use crate::config::APP_CONFIG;
use crate::error::ApiError;
use crate::repositories::user_repository::UserRepository;
use crate::utils::jwt;

/// Extracts the calling user from the `Authorization: Bearer` header.
/// Any failure (missing header, bad signature, expired token, unknown or
/// deleted user) is a 401.
pub struct AuthUser(pub Actor);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::unauthorized("Missing authorization token"))?;

        let claims = jwt::verify_token(&APP_CONFIG.jwt_secret, bearer.token())
            .map_err(|_| ApiError::unauthorized("Invalid or expired token"))?;

        let user_id: uuid::Uuid = claims
            .sub
            .parse()
            .map_err(|_| ApiError::unauthorized("Invalid or expired token"))?;

        let user = UserRepository::new()
            .find_active_by_id(user_id)
            .await?
            .ok_or_else(|| ApiError::unauthorized("User no longer exists"))?;

        Ok(AuthUser(Actor {
            id: user.user_id,
            role: user.role,
            name: user.full_name(),
            grade: user.grade,
            section: user.section,
        }))
    }
}
