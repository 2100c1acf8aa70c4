// SPDX-License-Identifier: MIT
// Copyright 2026 Reel-Vault Contributors

//! Data models for the application.

pub mod movie;
pub mod user;

pub use movie::{Movie, MovieSummary, Ratings, SoundtrackEntry};
pub use user::{Favorite, FavoriteSource, User};
