use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::password::{hash_password, validate_password, verify_password};
use crate::domain::repositories::User;
use crate::domain::user::value_objects::Email;

/// Request body for user registration
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Response from successful registration
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: Uuid,
    pub message: String,
}

/// Request body for user login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: Uuid,
    /// Time of the previous successful login, if any
    pub last_login: Option<DateTime<Utc>>,
}

/// Register a new user
///
/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let email = Email::new(&req.email).map_err(ApiError::bad_request)?;
    validate_password(&req.password).map_err(ApiError::bad_request)?;

    if state
        .users
        .find_by_email(&email)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .is_some()
    {
        return Err(ApiError::conflict("Email already registered"));
    }

    let password_hash = hash_password(&req.password, state.bcrypt_cost)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to hash password: {}", e)))?;

    let user = User {
        id: Uuid::new_v4(),
        email,
        password_hash,
        full_name: req.full_name,
        is_active: true,
        last_login: None,
    };

    let user_id = state.users.create(user).await.map_err(|e| {
        if e.contains("duplicate") || e.contains("unique") {
            ApiError::conflict("Email already registered")
        } else {
            ApiError::internal_server_error(format!("Failed to create user: {}", e))
        }
    })?;

    tracing::info!(user_id = %user_id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user_id,
            message: "User registered successfully".to_string(),
        }),
    ))
}

/// Login with email and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = Email::new(&req.email).map_err(ApiError::bad_request)?;

    let user = state
        .users
        .find_by_email(&email)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    if !user.is_active {
        return Err(ApiError::unauthorized("Account is disabled"));
    }

    let valid = verify_password(&req.password, &user.password_hash).map_err(|e| {
        ApiError::internal_server_error(format!("Password verification failed: {}", e))
    })?;

    if !valid {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    if let Err(e) = state.users.update_last_login(user.id).await {
        tracing::warn!(user_id = %user.id, error = %e, "failed to record last login");
    }

    let token = state
        .tokens
        .issue(user.id)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create token: {}", e)))?;

    Ok(Json(LoginResponse {
        token,
        user_id: user.id,
        last_login: user.last_login,
    }))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
