// SPDX-License-Identifier: MIT
// Copyright 2026 Reel-Vault Contributors

//! Movie model for storage and API.

use serde::{Deserialize, Serialize};

/// A soundtrack entry embedded in a movie document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundtrackEntry {
    pub title: String,
    #[serde(default)]
    pub duration: String,
    /// YouTube video id for the track
    #[serde(default)]
    pub yt_id: String,
}

/// External rating strings shown on the detail page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ratings {
    #[serde(default)]
    pub imdb: String,
    #[serde(default)]
    pub rt: String,
}

/// Stored movie record in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    /// Document ID (UUID v4)
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub poster_url: String,
    /// YouTube trailer video id
    #[serde(default)]
    pub trailer_id: String,
    /// TMDB vote average, rounded to one decimal
    pub tmdb_rating: Option<f64>,
    #[serde(default)]
    pub ratings: Ratings,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub actors: Vec<String>,
    #[serde(default)]
    pub soundtrack: Vec<SoundtrackEntry>,
    /// Backdrop/gallery image URLs
    #[serde(default)]
    pub gallery: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Projection returned by the public listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct MovieSummary {
    pub id: String,
    pub title: String,
    pub year: String,
    pub director: String,
    pub poster_url: String,
}

impl From<&Movie> for MovieSummary {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id.clone(),
            title: movie.title.clone(),
            year: movie.year.clone(),
            director: movie.director.clone(),
            poster_url: movie.poster_url.clone(),
        }
    }
}
