// SPDX-License-Identifier: MIT
// Copyright 2026 Reel-Vault Contributors

//! Movie catalog routes and TMDB proxy endpoints.

use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::error::{AppError, Result};
use crate::models::movie::{Movie, MovieSummary, Ratings, SoundtrackEntry};
use crate::services::tmdb::{map_movie_details, MovieDetails, NowPlayingEntry, SearchResult};
use crate::time_utils::now_rfc3339;
use crate::AppState;

/// Routes that need no authentication.
pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/movies/public", get(list_public))
        .route("/api/movies/public/{id}", get(get_public))
        .route("/api/movies/search", get(search_tmdb))
        .route("/api/movies/tmdb/{id}", get(tmdb_details))
        .route("/api/movies/now-playing", get(now_playing))
}

/// Catalog mutation routes; the auth middleware is applied in routes/mod.rs.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/movies", post(create_movie))
        .route("/api/movies/{id}", put(update_movie).delete(delete_movie))
}

// ─── Payloads ────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct SoundtrackEntryPayload {
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 16))]
    pub duration: String,
    #[serde(default)]
    #[validate(length(max = 32))]
    pub yt_id: String,
}

/// Movie payload shared by create and update; create additionally requires
/// `title` to be present.
#[derive(Debug, Deserialize, Validate)]
pub struct MoviePayload {
    #[validate(length(min = 1, max = 120))]
    pub title: Option<String>,
    #[validate(length(max = 10))]
    pub year: Option<String>,
    #[validate(length(max = 80))]
    pub director: Option<String>,
    #[validate(length(max = 300))]
    pub poster_url: Option<String>,
    #[validate(length(max = 32))]
    pub trailer_id: Option<String>,
    #[validate(range(min = 0.0, max = 10.0))]
    pub tmdb_rating: Option<f64>,
    #[validate(length(max = 2000))]
    pub overview: Option<String>,
    #[serde(default)]
    #[validate(length(max = 20), custom(function = validate_actor_names))]
    pub actors: Vec<String>,
    #[serde(default)]
    #[validate(nested)]
    pub soundtrack: Vec<SoundtrackEntryPayload>,
    #[serde(default)]
    #[validate(length(max = 12))]
    pub gallery: Vec<String>,
}

fn validate_actor_names(actors: &[String]) -> std::result::Result<(), ValidationError> {
    if actors.iter().any(|name| name.len() > 60) {
        return Err(ValidationError::new("actor_name_too_long"));
    }
    Ok(())
}

impl MoviePayload {
    fn into_soundtrack(entries: Vec<SoundtrackEntryPayload>) -> Vec<SoundtrackEntry> {
        entries
            .into_iter()
            .map(|e| SoundtrackEntry {
                title: e.title,
                duration: e.duration,
                yt_id: e.yt_id,
            })
            .collect()
    }

    /// Apply the payload onto an existing movie. Scalar fields are written
    /// only when present; the array fields always replace, so an absent
    /// array clears the stored one.
    fn apply_to(self, movie: &mut Movie) {
        if let Some(title) = self.title {
            movie.title = title;
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(director) = self.director {
            movie.director = director;
        }
        if let Some(poster_url) = self.poster_url {
            movie.poster_url = poster_url;
        }
        if let Some(trailer_id) = self.trailer_id {
            movie.trailer_id = trailer_id;
        }
        if let Some(rating) = self.tmdb_rating {
            movie.tmdb_rating = Some(rating);
        }
        if let Some(overview) = self.overview {
            movie.overview = overview;
        }
        movie.actors = self.actors;
        movie.soundtrack = Self::into_soundtrack(self.soundtrack);
        movie.gallery = self.gallery;
        movie.updated_at = now_rfc3339();
    }
}

// ─── Catalog CRUD ────────────────────────────────────────────────

/// List all movies, newest first, as summaries.
async fn list_public(State(state): State<Arc<AppState>>) -> Result<Json<Vec<MovieSummary>>> {
    let movies = state.db.list_movies().await?;
    Ok(Json(movies.iter().map(MovieSummary::from).collect()))
}

/// Fetch one movie with all fields.
async fn get_public(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Movie>> {
    let movie = state
        .db
        .get_movie(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Movie".to_string()))?;
    Ok(Json(movie))
}

async fn create_movie(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<MoviePayload>,
) -> Result<(StatusCode, Json<Movie>)> {
    payload.validate()?;
    let title = payload
        .title
        .clone()
        .ok_or_else(|| AppError::Validation("title is required".to_string()))?;

    let now = now_rfc3339();
    let mut movie = Movie {
        id: Uuid::new_v4().to_string(),
        title,
        year: String::new(),
        director: String::new(),
        poster_url: String::new(),
        trailer_id: String::new(),
        tmdb_rating: None,
        ratings: Ratings::default(),
        overview: String::new(),
        actors: vec![],
        soundtrack: vec![],
        gallery: vec![],
        created_at: now.clone(),
        updated_at: now,
    };
    payload.apply_to(&mut movie);

    state.db.upsert_movie(&movie).await?;
    tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}

async fn update_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<MoviePayload>,
) -> Result<Json<Movie>> {
    payload.validate()?;

    let mut movie = state
        .db
        .get_movie(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Movie".to_string()))?;

    payload.apply_to(&mut movie);
    state.db.upsert_movie(&movie).await?;

    Ok(Json(movie))
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    // Fetch first so a second delete of the same id is a 404.
    state
        .db
        .get_movie(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Movie".to_string()))?;

    state.db.delete_movie(&id).await?;
    tracing::info!(movie_id = %id, "Movie deleted");

    Ok(Json(DeleteResponse {
        message: "Movie deleted".to_string(),
    }))
}

// ─── TMDB proxy endpoints ────────────────────────────────────────

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

/// Search TMDB by title. Queries shorter than 2 characters are rejected
/// before any external call is made.
async fn search_tmdb(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<SearchResult>>> {
    let query = params.q.trim();
    // Character count, not bytes: one CJK character is still too short.
    if query.chars().count() < 2 {
        return Err(AppError::Validation("Query required".to_string()));
    }

    let results = state.tmdb.search(query).await?;
    Ok(Json(results))
}

/// Aggregate TMDB details, videos, images, and credits for one movie.
async fn tmdb_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MovieDetails>> {
    let assets = state.tmdb.fetch_movie_assets(&id).await?;
    Ok(Json(map_movie_details(assets)))
}

#[derive(Deserialize)]
struct NowPlayingQuery {
    page: Option<u32>,
    region: Option<String>,
    language: Option<String>,
}

async fn now_playing(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NowPlayingQuery>,
) -> Result<Json<Vec<NowPlayingEntry>>> {
    let page = params.page.unwrap_or(1);
    let region = params
        .region
        .unwrap_or_else(|| "default".to_string())
        .to_uppercase();
    let language = params.language.unwrap_or_else(|| "en-US".to_string());

    let results = state.tmdb.now_playing(page, &region, &language).await?;
    Ok(Json(results))
}
