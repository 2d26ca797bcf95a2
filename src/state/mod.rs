//! Shared client-side state.
//!
//! DESIGN
//! ======
//! A single `auth` container is the source of truth for everything the UI
//! renders about the session. Components read it through a context
//! `RwSignal` and never mutate fields in place; state changes only through
//! the whole-state transitions in `auth`.

pub mod auth;
