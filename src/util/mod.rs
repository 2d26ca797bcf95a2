//! Shared helpers for persistence and route guarding.

pub mod auth;
pub mod persist;
