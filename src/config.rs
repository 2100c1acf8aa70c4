// SPDX-License-Identifier: MIT
// Copyright 2026 Reel-Vault Contributors

//! Application configuration loaded from environment variables.
//!
//! Everything is read once at startup and handed to components through
//! `AppState`; nothing reads the environment after that.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GCP project ID for the Firestore store
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    /// Extra allowed CORS origin (the deployed frontend)
    pub frontend_url: String,
    /// Directory the static client pages are served from
    pub static_dir: String,

    // --- Secrets ---
    /// JWT signing key for session tokens (raw bytes)
    pub jwt_signing_key: Vec<u8>,
    /// TMDB API key
    pub tmdb_api_key: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),

            jwt_signing_key: env::var("JWT_SIGNING_KEY")
                .map_err(|_| ConfigError::Missing("JWT_SIGNING_KEY"))?
                .into_bytes(),
            tmdb_api_key: env::var("TMDB_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("TMDB_API_KEY"))?,
        })
    }

    /// Default config for tests only.
    pub fn test_default() -> Self {
        Self {
            gcp_project_id: "test-project".to_string(),
            port: 8080,
            frontend_url: "http://localhost:8080".to_string(),
            static_dir: "static".to_string(),
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!!".to_vec(),
            tmdb_api_key: "test_tmdb_key".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("JWT_SIGNING_KEY", "test_jwt_key_32_bytes_minimum!!!");
        env::set_var("TMDB_API_KEY", "test_key");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.tmdb_api_key, "test_key");
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, "static");
    }
}
