use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};

use super::dto::{AuthResponse, LoginRequest, RegisterRequest, UserInfo, VerifyResponse};
use crate::config::{APP_CONFIG, JWT_EXPIRES_SECONDS};
use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::error::{ApiError, FieldError};
use crate::extractor::AuthUser;
use crate::repositories::user_repository::UserRepository;
use crate::utils::jwt;
use crate::utils::student_code::generate_student_code;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/me", get(me))
        .route("/api/v1/auth/verify", get(verify))
}

fn validate_registration(payload: &RegisterRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if payload.first_name.trim().is_empty() {
        errors.push(FieldError::new("first_name", "First name is required"));
    }
    if payload.last_name.trim().is_empty() {
        errors.push(FieldError::new("last_name", "Last name is required"));
    }
    if !payload.email.contains('@') {
        errors.push(FieldError::new("email", "A valid email is required"));
    }
    if payload.password.len() < 6 {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 6 characters",
        ));
    }
    errors
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Validation failed or email already in use"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Authentication"
)]
pub async fn register(
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let errors = validate_registration(&payload);
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let user_repo = UserRepository::new();
    if user_repo.find_by_email(&payload.email).await?.is_some() {
        return Err(ApiError::bad_request("User already exists"));
    }

    let hashed = bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST)?;
    let student_code = match payload.role {
        RoleEnum::Student => Some(generate_student_code()),
        _ => None,
    };

    let user = user_repo
        .create(
            payload.first_name,
            payload.last_name,
            payload.email,
            hashed,
            payload.role,
            payload.grade,
            payload.section,
            student_code,
            payload.phone_number,
            payload.address,
        )
        .await?;

    let token = jwt::create_token(
        &APP_CONFIG.jwt_secret,
        &user.user_id.to_string(),
        &user.full_name(),
        user.role,
        JWT_EXPIRES_SECONDS,
    )?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Authentication"
)]
pub async fn login(Json(payload): Json<LoginRequest>) -> Result<Json<AuthResponse>, ApiError> {
    let user = UserRepository::new()
        .find_by_email(&payload.email)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    let password_valid = bcrypt::verify(&payload.password, &user.password)?;
    if !password_valid {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = jwt::create_token(
        &APP_CONFIG.jwt_secret,
        &user.user_id.to_string(),
        &user.full_name(),
        user.role,
        JWT_EXPIRES_SECONDS,
    )?;

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "Current user profile", body = UserInfo),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
pub async fn me(AuthUser(actor): AuthUser) -> Result<Json<UserInfo>, ApiError> {
    let user = UserRepository::new()
        .find_active_by_id(actor.id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("User no longer exists"))?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/verify",
    responses(
        (status = 200, description = "Token is valid", body = VerifyResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
pub async fn verify(AuthUser(actor): AuthUser) -> Result<Json<VerifyResponse>, ApiError> {
    let user = UserRepository::new()
        .find_active_by_id(actor.id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("User no longer exists"))?;
    Ok(Json(VerifyResponse {
        valid: true,
        user: user.into(),
    }))
}
