//! Wire DTOs for the auth API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the auth service payloads so serde round-trips stay
//! lossless. `Credentials` is serialize-only and built fresh for each login
//! call; it is never stored anywhere.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Authenticated user identity as returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name, also used as the login identity.
    pub name: String,
}

/// Login request body. Transient: exists only for the duration of one call.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Error payload from the auth API.
///
/// The only failure kind the client models. Network faults, bad
/// credentials, and server errors all collapse into a human-readable
/// message rendered by the login page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
