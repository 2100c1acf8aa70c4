// SPDX-License-Identifier: MIT
// Copyright 2026 Reel-Vault Contributors

//! TMDB API client for movie search, details, and now-playing listings.
//!
//! Handles:
//! - Title search (first 7 results)
//! - Detail aggregation (details + videos + images + credits, joined)
//! - Now-playing listing (12 second request timeout)
//!
//! Response mapping is kept in pure functions over the deserialized TMDB
//! payloads so it can be tested without a network.

use crate::error::AppError;
use crate::models::movie::{Ratings, SoundtrackEntry};
use futures_util::future::try_join4;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Mapped search results are capped at this many entries.
const SEARCH_RESULT_LIMIT: usize = 7;
/// Now-playing responses are capped at this many entries.
const NOW_PLAYING_LIMIT: usize = 12;
/// Cast names taken from the credits response.
const CAST_LIMIT: usize = 8;
/// Backdrop images taken from the images response.
const GALLERY_LIMIT: usize = 6;
/// Request timeout for the now-playing endpoint. Other TMDB calls follow
/// the transport defaults with no explicit timeout.
const NOW_PLAYING_TIMEOUT: Duration = Duration::from_secs(12);

const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// TMDB API client.
#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: "https://api.themoviedb.org/3".to_string(),
            api_key,
        }
    }

    /// Search movies by title.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, AppError> {
        let url = format!("{}/search/movie", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("query", query)])
            .send()
            .await
            .map_err(|_| AppError::Upstream("Failed to search movies".to_string()))?;

        let body: TmdbListResponse = Self::check_response_json(response, "search").await?;
        Ok(map_search_results(body))
    }

    /// Fetch the four detail documents for a movie in parallel.
    ///
    /// All four calls must succeed; any failure aborts the whole operation.
    pub async fn fetch_movie_assets(&self, movie_id: &str) -> Result<MovieAssets, AppError> {
        let (details, videos, images, credits) = try_join4(
            self.get_json::<TmdbDetails>(format!("{}/movie/{}", self.base_url, movie_id)),
            self.get_json::<TmdbVideosResponse>(format!(
                "{}/movie/{}/videos",
                self.base_url, movie_id
            )),
            self.get_json::<TmdbImagesResponse>(format!(
                "{}/movie/{}/images",
                self.base_url, movie_id
            )),
            self.get_json::<TmdbCreditsResponse>(format!(
                "{}/movie/{}/credits",
                self.base_url, movie_id
            )),
        )
        .await?;

        Ok(MovieAssets {
            details,
            videos,
            images,
            credits,
        })
    }

    /// Fetch the now-playing listing with an explicit request timeout.
    pub async fn now_playing(
        &self,
        page: u32,
        region: &str,
        language: &str,
    ) -> Result<Vec<NowPlayingEntry>, AppError> {
        let url = format!("{}/movie/now_playing", self.base_url);
        let response = self
            .http
            .get(&url)
            .timeout(NOW_PLAYING_TIMEOUT)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("page", &page.to_string()),
                ("region", region),
                ("language", language),
            ])
            .send()
            .await
            .map_err(|_| AppError::Upstream("Failed to fetch now playing".to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream("Failed to fetch now playing".to_string()));
        }

        let body: TmdbListResponse = response
            .json()
            .await
            .map_err(|_| AppError::Upstream("Failed to fetch now playing".to_string()))?;
        Ok(map_now_playing(body))
    }

    /// Generic GET with the api_key query parameter and JSON response.
    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: String) -> Result<T, AppError> {
        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|_| AppError::Upstream("Failed to fetch movie details".to_string()))?;

        Self::check_response_json(response, "details").await
    }

    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        response: reqwest::Response,
        op: &str,
    ) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = %status, op, "TMDB request failed");
            return Err(AppError::Upstream(format!("TMDB {} request failed", op)));
        }
        response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("TMDB {} response invalid: {}", op, e)))
    }
}

// ─── Raw TMDB payloads ───────────────────────────────────────────

/// Shared list shape of the search and now-playing endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct TmdbListResponse {
    #[serde(default)]
    pub results: Vec<TmdbMovieItem>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TmdbMovieItem {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub overview: Option<String>,
    pub vote_average: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TmdbDetails {
    #[serde(default)]
    pub title: String,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub overview: Option<String>,
    pub vote_average: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TmdbVideosResponse {
    #[serde(default)]
    pub results: Vec<TmdbVideo>,
}

#[derive(Debug, Deserialize)]
pub struct TmdbVideo {
    pub key: String,
    pub site: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TmdbImagesResponse {
    #[serde(default)]
    pub backdrops: Vec<TmdbImage>,
}

#[derive(Debug, Deserialize)]
pub struct TmdbImage {
    pub file_path: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TmdbCreditsResponse {
    #[serde(default)]
    pub cast: Vec<TmdbCastMember>,
    #[serde(default)]
    pub crew: Vec<TmdbCrewMember>,
}

#[derive(Debug, Deserialize)]
pub struct TmdbCastMember {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct TmdbCrewMember {
    pub name: String,
    pub job: String,
}

/// The four detail documents for one movie, fetched in parallel.
#[derive(Debug, Default)]
pub struct MovieAssets {
    pub details: TmdbDetails,
    pub videos: TmdbVideosResponse,
    pub images: TmdbImagesResponse,
    pub credits: TmdbCreditsResponse,
}

// ─── Mapped API shapes ───────────────────────────────────────────

/// One entry of the search endpoint response.
#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub id: u64,
    pub title: String,
    pub year: String,
    /// w200 thumbnail URL, or null when TMDB has no poster
    pub poster: Option<String>,
}

/// One entry of the now-playing endpoint response.
#[derive(Debug, Serialize)]
pub struct NowPlayingEntry {
    pub id: u64,
    pub title: String,
    pub year: String,
    pub overview: String,
    pub rating: Option<f64>,
    pub poster_url: String,
    pub backdrop_url: String,
}

/// Detail endpoint response, shaped like a catalog movie so the client can
/// render both interchangeably. Never persisted.
#[derive(Debug, Serialize)]
pub struct MovieDetails {
    pub title: String,
    pub year: String,
    pub director: String,
    pub overview: String,
    pub actors: Vec<String>,
    pub poster_url: String,
    pub trailer_id: Option<String>,
    pub tmdb_rating: Option<f64>,
    pub ratings: Ratings,
    pub gallery: Vec<String>,
    pub soundtrack: Vec<SoundtrackEntry>,
}

// ─── Mapping ─────────────────────────────────────────────────────

/// Release year is the leading segment of the `YYYY-MM-DD` release date.
fn year_from_release_date(release_date: Option<&str>) -> String {
    release_date
        .and_then(|d| d.split('-').next())
        .filter(|y| !y.is_empty())
        .unwrap_or("N/A")
        .to_string()
}

fn image_url(size: &str, path: &str) -> String {
    format!("{}/{}{}", IMAGE_BASE_URL, size, path)
}

fn round_rating(vote_average: Option<f64>) -> Option<f64> {
    vote_average.map(|v| (v * 10.0).round() / 10.0)
}

pub fn map_search_results(body: TmdbListResponse) -> Vec<SearchResult> {
    body.results
        .into_iter()
        .take(SEARCH_RESULT_LIMIT)
        .map(|m| SearchResult {
            id: m.id,
            title: m.title,
            year: year_from_release_date(m.release_date.as_deref()),
            poster: m.poster_path.map(|p| image_url("w200", &p)),
        })
        .collect()
}

pub fn map_now_playing(body: TmdbListResponse) -> Vec<NowPlayingEntry> {
    body.results
        .into_iter()
        .take(NOW_PLAYING_LIMIT)
        .map(|m| NowPlayingEntry {
            id: m.id,
            title: m.title,
            year: year_from_release_date(m.release_date.as_deref()),
            overview: m.overview.unwrap_or_default(),
            rating: round_rating(m.vote_average),
            poster_url: m
                .poster_path
                .map(|p| image_url("w500", &p))
                .unwrap_or_default(),
            backdrop_url: m
                .backdrop_path
                .map(|p| image_url("original", &p))
                .unwrap_or_default(),
        })
        .collect()
}

/// Fold the four detail documents into the response shape.
///
/// A movie with no YouTube trailer maps to `trailer_id: None`; that is not
/// an error.
pub fn map_movie_details(assets: MovieAssets) -> MovieDetails {
    let MovieAssets {
        details,
        videos,
        images,
        credits,
    } = assets;

    let trailer_id = videos
        .results
        .into_iter()
        .find(|v| v.kind == "Trailer" && v.site == "YouTube")
        .map(|v| v.key);

    let director = credits
        .crew
        .into_iter()
        .find(|c| c.job == "Director")
        .map(|c| c.name)
        .unwrap_or_else(|| "Unknown".to_string());

    let actors: Vec<String> = credits
        .cast
        .into_iter()
        .take(CAST_LIMIT)
        .map(|a| a.name)
        .collect();

    let tmdb_rating = round_rating(details.vote_average);
    let imdb = tmdb_rating
        .map(|r| format!("{:.1}", r))
        .unwrap_or_else(|| "N/A".to_string());

    MovieDetails {
        title: details.title,
        year: year_from_release_date(details.release_date.as_deref()),
        director,
        overview: details.overview.unwrap_or_default(),
        actors,
        poster_url: details
            .poster_path
            .map(|p| image_url("original", &p))
            .unwrap_or_default(),
        trailer_id,
        tmdb_rating,
        ratings: Ratings {
            imdb,
            rt: "N/A".to_string(),
        },
        gallery: images
            .backdrops
            .into_iter()
            .take(GALLERY_LIMIT)
            .map(|img| image_url("original", &img.file_path))
            .collect(),
        // Soundtrack lookup is a separate endpoint; details never carry one.
        soundtrack: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, title: &str, date: Option<&str>, poster: Option<&str>) -> TmdbMovieItem {
        TmdbMovieItem {
            id,
            title: title.to_string(),
            release_date: date.map(str::to_string),
            poster_path: poster.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_search_maps_year_and_thumbnail() {
        let body = TmdbListResponse {
            results: vec![item(603, "The Matrix", Some("1999-03-31"), Some("/m.jpg"))],
        };
        let mapped = map_search_results(body);
        assert_eq!(mapped.len(), 1);
        assert_eq!(mapped[0].year, "1999");
        assert_eq!(
            mapped[0].poster.as_deref(),
            Some("https://image.tmdb.org/t/p/w200/m.jpg")
        );
    }

    #[test]
    fn test_search_tolerates_missing_fields() {
        let body = TmdbListResponse {
            results: vec![item(1, "Obscure", None, None)],
        };
        let mapped = map_search_results(body);
        assert_eq!(mapped[0].year, "N/A");
        assert!(mapped[0].poster.is_none());
    }

    #[test]
    fn test_search_caps_at_seven() {
        let body = TmdbListResponse {
            results: (0..10)
                .map(|i| item(i, "m", Some("2020-01-01"), None))
                .collect(),
        };
        assert_eq!(map_search_results(body).len(), 7);
    }

    #[test]
    fn test_now_playing_caps_at_twelve_and_rounds() {
        let mut results: Vec<TmdbMovieItem> = (0..15)
            .map(|i| item(i, "m", Some("2026-05-01"), None))
            .collect();
        results[0].vote_average = Some(7.849);
        let mapped = map_now_playing(TmdbListResponse { results });
        assert_eq!(mapped.len(), 12);
        assert_eq!(mapped[0].rating, Some(7.8));
    }

    fn assets_with_videos(videos: Vec<TmdbVideo>) -> MovieAssets {
        MovieAssets {
            details: TmdbDetails {
                title: "Heat".to_string(),
                release_date: Some("1995-12-15".to_string()),
                vote_average: Some(8.25),
                ..Default::default()
            },
            videos: TmdbVideosResponse { results: videos },
            ..Default::default()
        }
    }

    #[test]
    fn test_details_picks_youtube_trailer() {
        let assets = assets_with_videos(vec![
            TmdbVideo {
                key: "clip1".to_string(),
                site: "YouTube".to_string(),
                kind: "Clip".to_string(),
            },
            TmdbVideo {
                key: "vimeo1".to_string(),
                site: "Vimeo".to_string(),
                kind: "Trailer".to_string(),
            },
            TmdbVideo {
                key: "yt1".to_string(),
                site: "YouTube".to_string(),
                kind: "Trailer".to_string(),
            },
        ]);
        let details = map_movie_details(assets);
        assert_eq!(details.trailer_id.as_deref(), Some("yt1"));
    }

    #[test]
    fn test_details_no_trailer_is_null_not_error() {
        let details = map_movie_details(assets_with_videos(vec![]));
        assert_eq!(details.trailer_id, None);
        assert_eq!(details.year, "1995");
    }

    #[test]
    fn test_details_director_falls_back_to_unknown() {
        let details = map_movie_details(MovieAssets::default());
        assert_eq!(details.director, "Unknown");
        assert_eq!(details.ratings.rt, "N/A");
        assert_eq!(details.ratings.imdb, "N/A");
    }

    #[test]
    fn test_details_caps_cast_and_gallery() {
        let assets = MovieAssets {
            credits: TmdbCreditsResponse {
                cast: (0..12)
                    .map(|i| TmdbCastMember {
                        name: format!("Actor {}", i),
                    })
                    .collect(),
                crew: vec![TmdbCrewMember {
                    name: "Michael Mann".to_string(),
                    job: "Director".to_string(),
                }],
            },
            images: TmdbImagesResponse {
                backdrops: (0..9)
                    .map(|i| TmdbImage {
                        file_path: format!("/b{}.jpg", i),
                    })
                    .collect(),
            },
            ..Default::default()
        };
        let details = map_movie_details(assets);
        assert_eq!(details.actors.len(), 8);
        assert_eq!(details.gallery.len(), 6);
        assert_eq!(details.director, "Michael Mann");
    }

    #[test]
    fn test_rating_rounds_to_one_decimal() {
        let assets = assets_with_videos(vec![]);
        let details = map_movie_details(assets);
        assert_eq!(details.tmdb_rating, Some(8.3));
        assert_eq!(details.ratings.imdb, "8.3");
    }
}
