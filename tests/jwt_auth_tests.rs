// SPDX-License-Identifier: MIT
// Copyright 2026 Reel-Vault Contributors

//! JWT compatibility tests.
//!
//! These verify that tokens issued by the login path can be decoded by the
//! auth middleware, catching claim/algorithm drift early.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use reel_vault::middleware::auth::{create_jwt, Claims};

const SIGNING_KEY: &[u8] = b"test_signing_key_32_bytes_long!!";

#[test]
fn test_jwt_roundtrip() {
    let user_id = "a3f1c2d4-0000-4000-8000-000000000001";
    let token = create_jwt(user_id, SIGNING_KEY).unwrap();

    let key = DecodingKey::from_secret(SIGNING_KEY);
    let validation = Validation::new(Algorithm::HS256);

    let token_data = decode::<Claims>(&token, &key, &validation)
        .expect("Failed to decode JWT - check Claims struct compatibility");

    assert_eq!(token_data.claims.sub, user_id);
    assert!(token_data.claims.exp > token_data.claims.iat);
}

#[test]
fn test_jwt_expiry_is_two_hours() {
    use std::time::{SystemTime, UNIX_EPOCH};

    let token = create_jwt("user-1", SIGNING_KEY).unwrap();

    let key = DecodingKey::from_secret(SIGNING_KEY);
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false; // checked manually

    let token_data = decode::<Claims>(&token, &key, &validation).unwrap();

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize;

    let ttl = token_data.claims.exp - now;
    assert!((7000..=7200).contains(&ttl), "TTL was {} seconds", ttl);
}

#[test]
fn test_jwt_rejects_wrong_key() {
    let token = create_jwt("user-1", SIGNING_KEY).unwrap();

    let key = DecodingKey::from_secret(b"some_other_key_entirely_here!!!!");
    let validation = Validation::new(Algorithm::HS256);

    assert!(decode::<Claims>(&token, &key, &validation).is_err());
}
