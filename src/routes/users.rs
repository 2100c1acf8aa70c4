// SPDX-License-Identifier: MIT
// Copyright 2026 Reel-Vault Contributors

//! Profile and favorites routes (all require authentication).

use axum::{
    extract::{Json, Path, State},
    routing::{delete, get, put},
    Extension, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::user::{Favorite, FavoriteSource, User, MAX_FAVORITES};
use crate::time_utils::now_rfc3339;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users/profile", get(get_profile).put(update_profile))
        .route("/api/users/favorites", put(toggle_favorite))
        .route(
            "/api/users/favorites/{source}/{movie_id}",
            delete(remove_favorite),
        )
}

async fn load_user(state: &AppState, user_id: &str) -> Result<User> {
    state
        .db
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))
}

// ─── Profile ─────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ProfileResponse {
    pub username: String,
    pub email: String,
    pub favorites: Vec<Favorite>,
}

async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<ProfileResponse>> {
    let user = load_user(&state, &auth.user_id).await?;

    let mut favorites = user.favorites;
    favorites.truncate(MAX_FAVORITES);

    Ok(Json(ProfileResponse {
        username: user.username,
        email: user.email,
        favorites,
    }))
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfilePayload {
    /// The only mutable profile field
    #[validate(length(min = 3, max = 24))]
    pub username: Option<String>,
}

#[derive(Serialize)]
pub struct UpdateProfileResponse {
    pub message: String,
    pub username: String,
    pub email: String,
}

async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<UpdateProfilePayload>,
) -> Result<Json<UpdateProfileResponse>> {
    payload.validate()?;

    let mut user = load_user(&state, &auth.user_id).await?;

    if let Some(username) = payload.username {
        if username != user.username {
            if let Some(existing) = state.db.find_user_by_username(&username).await? {
                if existing.id != user.id {
                    return Err(AppError::Conflict("Username already exists".to_string()));
                }
            }
            user.username = username;
            user.updated_at = now_rfc3339();
            state.db.upsert_user(&user).await?;
        }
    }

    Ok(Json(UpdateProfileResponse {
        message: "Profile updated".to_string(),
        username: user.username,
        email: user.email,
    }))
}

// ─── Favorites ───────────────────────────────────────────────────

/// Missing fields deserialize to empty strings so schema violations stay
/// 400s from the validator rather than extractor rejections.
#[derive(Debug, Deserialize, Validate)]
pub struct FavoritePayload {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub movie_id: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 10))]
    pub year: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

fn parse_source(raw: &str) -> Result<FavoriteSource> {
    match raw {
        "local" => Ok(FavoriteSource::Local),
        "tmdb" => Ok(FavoriteSource::Tmdb),
        _ => Err(AppError::Validation(
            "source must be 'local' or 'tmdb'".to_string(),
        )),
    }
}

#[derive(Serialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<Favorite>,
}

/// Toggle a favorite: remove it when the `(source, movie_id)` pair is
/// already present, otherwise prepend it (evicting the oldest beyond the
/// cap of 5).
async fn toggle_favorite(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<FavoritePayload>,
) -> Result<Json<FavoritesResponse>> {
    payload.validate()?;
    let source = parse_source(&payload.source)?;

    let mut user = load_user(&state, &auth.user_id).await?;

    user.toggle_favorite(Favorite {
        source,
        movie_id: payload.movie_id,
        title: payload.title,
        // "N/A" only when the field is absent; an empty string is kept as sent.
        year: payload.year.unwrap_or_else(|| "N/A".to_string()),
        poster_url: payload.poster_url.unwrap_or_default(),
        added_at: now_rfc3339(),
    });

    user.updated_at = now_rfc3339();
    state.db.upsert_user(&user).await?;

    let mut favorites = user.favorites;
    favorites.truncate(MAX_FAVORITES);
    Ok(Json(FavoritesResponse { favorites }))
}

/// Remove one favorite by composite key. Removing an absent entry is a
/// no-op and still returns the (unchanged) list.
async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path((source, movie_id)): Path<(String, String)>,
) -> Result<Json<FavoritesResponse>> {
    let source = parse_source(&source)?;

    let mut user = load_user(&state, &auth.user_id).await?;
    user.remove_favorite(source, &movie_id);
    user.updated_at = now_rfc3339();
    state.db.upsert_user(&user).await?;

    let mut favorites = user.favorites;
    favorites.truncate(MAX_FAVORITES);
    Ok(Json(FavoritesResponse { favorites }))
}
