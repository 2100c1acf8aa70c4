// SPDX-License-Identifier: MIT
// Copyright 2026 Reel-Vault Contributors

//! iTunes search API client for soundtrack lookup.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request timeout for iTunes lookups.
const SEARCH_TIMEOUT: Duration = Duration::from_secs(12);

/// iTunes search API client.
#[derive(Clone)]
pub struct ItunesClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for ItunesClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ItunesClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: "https://itunes.apple.com".to_string(),
        }
    }

    /// Search songs for a composed term, keeping only playable results.
    pub async fn search_songs(&self, term: &str, limit: u32) -> Result<Vec<SoundtrackHit>, AppError> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .http
            .get(&url)
            .timeout(SEARCH_TIMEOUT)
            .query(&[
                ("term", term),
                ("media", "music"),
                ("entity", "song"),
                ("limit", &limit.to_string()),
            ])
            .send()
            .await
            .map_err(|_| AppError::Upstream("Failed to fetch soundtracks".to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream("Failed to fetch soundtracks".to_string()));
        }

        let body: ItunesSearchResponse = response
            .json()
            .await
            .map_err(|_| AppError::Upstream("Failed to fetch soundtracks".to_string()))?;

        Ok(map_song_results(body))
    }
}

/// Compose the search term: the year is appended only when given, to help
/// relevance.
pub fn build_search_term(title: &str, year: Option<&str>) -> String {
    match year {
        Some(y) if !y.is_empty() => format!("{} soundtrack {}", title, y),
        _ => format!("{} soundtrack", title),
    }
}

// ─── Raw iTunes payloads ─────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct ItunesSearchResponse {
    #[serde(default)]
    pub results: Vec<ItunesTrack>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItunesTrack {
    #[serde(default)]
    pub track_name: String,
    #[serde(default)]
    pub artist_name: String,
    #[serde(default)]
    pub collection_name: String,
    pub artwork_url100: Option<String>,
    pub preview_url: Option<String>,
    pub track_time_millis: Option<u64>,
}

/// One playable soundtrack entry in the API response.
#[derive(Debug, Serialize)]
pub struct SoundtrackHit {
    pub track_name: String,
    pub artist_name: String,
    pub collection_name: String,
    pub artwork_url: Option<String>,
    pub preview_url: String,
    pub duration_millis: Option<u64>,
}

/// Keep only tracks with a preview URL (playable in the client).
pub fn map_song_results(body: ItunesSearchResponse) -> Vec<SoundtrackHit> {
    body.results
        .into_iter()
        .filter_map(|track| {
            let preview_url = track.preview_url?;
            Some(SoundtrackHit {
                track_name: track.track_name,
                artist_name: track.artist_name,
                collection_name: track.collection_name,
                artwork_url: track.artwork_url100,
                preview_url,
                duration_millis: track.track_time_millis,
            })
        })
        .collect()
}
