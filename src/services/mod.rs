// SPDX-License-Identifier: MIT
// Copyright 2026 Reel-Vault Contributors

//! Services module - external API clients and password hashing.

pub mod itunes;
pub mod password;
pub mod tmdb;

pub use itunes::ItunesClient;
pub use tmdb::TmdbClient;
