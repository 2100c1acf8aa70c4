// SPDX-License-Identifier: MIT
// Copyright 2026 Reel-Vault Contributors

//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// Maximum number of favorites a user can keep.
pub const MAX_FAVORITES: usize = 5;

/// Where a favorite movie came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteSource {
    /// A movie from our own catalog
    Local,
    /// A movie known only by its TMDB id
    Tmdb,
}

/// Denormalized favorite snapshot embedded in the user document.
///
/// Identity is the composite key `(source, movie_id)`; there is no
/// referential link back to a `Movie` document, so deleting a movie never
/// dangles a favorite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Favorite {
    pub source: FavoriteSource,
    pub movie_id: String,
    pub title: String,
    #[serde(default = "default_year")]
    pub year: String,
    #[serde(default)]
    pub poster_url: String,
    /// When the favorite was added (RFC3339)
    pub added_at: String,
}

fn default_year() -> String {
    "N/A".to_string()
}

/// User profile stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Document ID (UUID v4)
    pub id: String,
    /// Unique display name (3-24 chars)
    pub username: String,
    /// Unique email, stored lowercase
    pub email: String,
    /// Bcrypt password hash
    pub password_hash: String,
    /// Profile picture URL
    #[serde(default)]
    pub avatar_url: String,
    /// Saved movies, most-recent-first, at most `MAX_FAVORITES`
    #[serde(default)]
    pub favorites: Vec<Favorite>,
    /// When the account was created (RFC3339)
    pub created_at: String,
    /// Last profile mutation (RFC3339)
    pub updated_at: String,
}

impl User {
    /// Toggle a favorite in place.
    ///
    /// If an entry with the same `(source, movie_id)` exists it is removed;
    /// otherwise the new entry is prepended and the list truncated to
    /// `MAX_FAVORITES`, evicting the oldest entry.
    pub fn toggle_favorite(&mut self, fav: Favorite) {
        if let Some(idx) = self.favorite_index(fav.source, &fav.movie_id) {
            self.favorites.remove(idx);
        } else {
            self.favorites.insert(0, fav);
            self.favorites.truncate(MAX_FAVORITES);
        }
    }

    /// Remove a favorite by composite key. Removing an absent entry is a
    /// no-op.
    pub fn remove_favorite(&mut self, source: FavoriteSource, movie_id: &str) {
        if let Some(idx) = self.favorite_index(source, movie_id) {
            self.favorites.remove(idx);
        }
    }

    fn favorite_index(&self, source: FavoriteSource, movie_id: &str) -> Option<usize> {
        self.favorites
            .iter()
            .position(|f| f.source == source && f.movie_id == movie_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User {
            id: "u1".to_string(),
            username: "moviebuff".to_string(),
            email: "buff@example.com".to_string(),
            password_hash: String::new(),
            avatar_url: String::new(),
            favorites: vec![],
            created_at: "2026-01-01T00:00:00Z".to_string(),
            updated_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    fn fav(source: FavoriteSource, movie_id: &str) -> Favorite {
        Favorite {
            source,
            movie_id: movie_id.to_string(),
            title: format!("Movie {}", movie_id),
            year: "N/A".to_string(),
            poster_url: String::new(),
            added_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_toggle_twice_restores_original_state() {
        let mut user = test_user();
        user.toggle_favorite(fav(FavoriteSource::Tmdb, "603"));
        assert_eq!(user.favorites.len(), 1);
        user.toggle_favorite(fav(FavoriteSource::Tmdb, "603"));
        assert!(user.favorites.is_empty());
    }

    #[test]
    fn test_same_id_different_source_is_distinct() {
        let mut user = test_user();
        user.toggle_favorite(fav(FavoriteSource::Tmdb, "603"));
        user.toggle_favorite(fav(FavoriteSource::Local, "603"));
        assert_eq!(user.favorites.len(), 2);
    }

    #[test]
    fn test_sixth_favorite_evicts_oldest() {
        let mut user = test_user();
        for i in 1..=6 {
            user.toggle_favorite(fav(FavoriteSource::Tmdb, &i.to_string()));
        }
        assert_eq!(user.favorites.len(), MAX_FAVORITES);
        // Newest first, and the first-added entry is gone
        assert_eq!(user.favorites[0].movie_id, "6");
        assert!(!user.favorites.iter().any(|f| f.movie_id == "1"));
    }

    #[test]
    fn test_remove_absent_favorite_is_noop() {
        let mut user = test_user();
        user.toggle_favorite(fav(FavoriteSource::Local, "abc"));
        user.remove_favorite(FavoriteSource::Tmdb, "abc");
        assert_eq!(user.favorites.len(), 1);
        user.remove_favorite(FavoriteSource::Local, "abc");
        assert!(user.favorites.is_empty());
    }

    #[test]
    fn test_favorite_source_serializes_lowercase() {
        let json = serde_json::to_string(&FavoriteSource::Tmdb).unwrap();
        assert_eq!(json, "\"tmdb\"");
        let parsed: FavoriteSource = serde_json::from_str("\"local\"").unwrap();
        assert_eq!(parsed, FavoriteSource::Local);
    }
}
