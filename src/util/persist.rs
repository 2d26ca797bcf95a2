//! Browser localStorage persistence for the auth slice.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth slice is written on every login/logout transition and read once
//! at startup to rehydrate the state container, so a page reload keeps a
//! signed-in user signed in. Writes are best-effort: storage failures are
//! silently dropped and the session simply won't survive a reload.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use serde::{Deserialize, Serialize};

use crate::net::types::User;

/// Key for the persisted auth record in `localStorage`.
const STORAGE_KEY: &str = "portal_auth";

/// Durable subset of the auth state.
///
/// Credentials and transient flags (in-progress, error) are deliberately
/// absent: only the identity outcome survives a reload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSlice {
    pub is_authenticated: bool,
    #[serde(default)]
    pub user: Option<User>,
}

impl AuthSlice {
    /// Slice recorded after a successful login.
    pub fn authenticated(user: User) -> Self {
        Self { is_authenticated: true, user: Some(user) }
    }

    /// Slice recorded on logout.
    pub fn logged_out() -> Self {
        Self::default()
    }
}

/// Overwrite the persisted auth slice.
pub fn save_auth_slice(slice: &AuthSlice) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            return;
        };
        let Ok(raw) = serde_json::to_string(slice) else {
            return;
        };
        let _ = storage.set_item(STORAGE_KEY, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = slice;
    }
}

/// Load the persisted auth slice, if any.
///
/// Returns `None` on the server, when nothing was stored, or when the
/// stored record no longer parses (schema drift is treated as signed-out).
pub fn load_auth_slice() -> Option<AuthSlice> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
