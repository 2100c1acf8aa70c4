// SPDX-License-Identifier: MIT
// Copyright 2026 Reel-Vault Contributors

//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const MOVIES: &str = "movies";
}
