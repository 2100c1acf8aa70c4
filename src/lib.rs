// SPDX-License-Identifier: MIT
// Copyright 2026 Reel-Vault Contributors

//! Reel-Vault: a movie catalog API.
//!
//! This crate provides the backend for a movie-catalog web application:
//! user accounts with a favorites list, a local movie collection, and
//! read-through proxies for the TMDB metadata API and the iTunes music
//! search API.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;
use services::{ItunesClient, TmdbClient};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub tmdb: TmdbClient,
    pub itunes: ItunesClient,
}
