// SPDX-License-Identifier: MIT
// Copyright 2026 Reel-Vault Contributors

//! Soundtrack lookup route (iTunes proxy).

use axum::{
    extract::{Json, Query, State},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::services::itunes::{build_search_term, SoundtrackHit};
use crate::AppState;

/// Most results the endpoint will request from iTunes.
const MAX_LIMIT: u32 = 20;
const DEFAULT_LIMIT: u32 = 10;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/soundtracks", get(search_soundtracks))
}

#[derive(Deserialize)]
struct SoundtrackQuery {
    #[serde(default)]
    title: String,
    year: Option<String>,
    limit: Option<u32>,
}

async fn search_soundtracks(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SoundtrackQuery>,
) -> Result<Json<Vec<SoundtrackHit>>> {
    let title = params.title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("title is required".to_string()));
    }

    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let year = params.year.as_deref().map(str::trim);
    let term = build_search_term(title, year);

    let hits = state.itunes.search_songs(&term, limit).await?;
    Ok(Json(hits))
}
