//! Networking modules for the auth HTTP boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls, `types` defines the request/response
//! schema shared with the auth service.

pub mod api;
pub mod types;
