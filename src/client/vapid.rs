// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! VAPID public key decoding.

use base64::{engine::general_purpose::STANDARD, DecodeError, Engine as _};

/// Decode an unpadded base64url VAPID key into the raw bytes the push API
/// expects as `applicationServerKey`.
pub fn decode_vapid_key(key: &str) -> Result<Vec<u8>, DecodeError> {
    let padding = (4 - key.len() % 4) % 4;

    let mut standard: String = key
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    standard.extend(std::iter::repeat('=').take(padding));

    STANDARD.decode(standard)
}
