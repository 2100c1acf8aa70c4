// SPDX-License-Identifier: MIT
// Copyright 2026 Reel-Vault Contributors

//! Registration and login routes.

use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::auth::create_jwt;
use crate::models::User;
use crate::services::password;
use crate::time_utils::now_rfc3339;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
}

/// Missing fields deserialize to empty strings so the validator (not the
/// JSON extractor) reports them, keeping every schema violation a 400.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterPayload {
    #[serde(default)]
    #[validate(length(min = 3, max = 24))]
    pub username: String,
    #[serde(default)]
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 6, max = 72))]
    pub password: String,
    #[serde(default)]
    #[validate(length(min = 6, max = 72))]
    pub confirm_password: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub message: String,
}

/// Create a new account.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterPayload>,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    payload.validate()?;

    if payload.password != payload.confirm_password {
        return Err(AppError::Validation("Passwords do not match".to_string()));
    }

    let email = payload.email.trim().to_lowercase();

    // Firestore has no unique indexes; lookup-before-insert is the
    // uniqueness check (the race window is accepted, last write wins).
    let username_taken = state
        .db
        .find_user_by_username(&payload.username)
        .await?
        .is_some();
    let email_taken = state.db.find_user_by_email(&email).await?.is_some();
    if username_taken || email_taken {
        return Err(AppError::Conflict(
            "Username or email already exists".to_string(),
        ));
    }

    let now = now_rfc3339();
    let user = User {
        id: Uuid::new_v4().to_string(),
        username: payload.username,
        email,
        password_hash: password::hash_password(&payload.password)?,
        avatar_url: String::new(),
        favorites: vec![],
        created_at: now.clone(),
        updated_at: now,
    };

    state.db.upsert_user(&user).await?;
    tracing::info!(username = %user.username, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created".to_string(),
        }),
    ))
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginPayload {
    /// Username or email
    #[serde(default)]
    #[validate(length(min = 3, max = 120))]
    pub identifier: String,
    #[serde(default)]
    #[validate(length(min = 6, max = 72))]
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub email: String,
}

/// Log in with a username or email and receive a bearer token.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<LoginResponse>> {
    payload.validate()?;

    // Username matches are exact; email matches are case-folded.
    let folded = payload.identifier.trim().to_lowercase();
    let user = match state.db.find_user_by_username(&payload.identifier).await? {
        Some(user) => user,
        None => state
            .db
            .find_user_by_email(&folded)
            .await?
            .ok_or(AppError::UserNotFound)?,
    };

    if !password::verify_password(&payload.password, &user.password_hash)? {
        return Err(AppError::InvalidCredentials);
    }

    let token = create_jwt(&user.id, &state.config.jwt_signing_key)?;
    tracing::info!(username = %user.username, "User logged in");

    Ok(Json(LoginResponse {
        token,
        username: user.username,
        email: user.email,
    }))
}
