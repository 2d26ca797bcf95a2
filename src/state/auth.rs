//! Auth state container: session state plus the login/logout actions.
//!
//! STATE MACHINE
//! =============
//! Idle -> InProgress (login dispatched) -> Authenticated | Failed (API
//! resolution). Authenticated -> Idle on logout. Failed -> InProgress on
//! the next login. Every transition replaces the whole state value; no
//! field is mutated in isolation, so a reader always sees exactly one of
//! {in-progress, authenticated, error} describing the latest outcome.
//!
//! Overlapping logins are not coordinated: a second dispatch while one is
//! pending simply re-enters InProgress and the last API response to
//! resolve wins. There is no cancellation, so a login still in flight when
//! logout runs will overwrite the reset state if it later resolves.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::persist::{self, AuthSlice};

/// Authentication state for the current browser session.
///
/// `user` is `Some` only when `is_authenticated` is true; `error` holds the
/// message of the most recent failed attempt until the next dispatch
/// clears it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_in_progress: bool,
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub error: Option<String>,
}

impl AuthState {
    /// State right after a login is dispatched: pending, with any prior
    /// user or error cleared.
    pub fn login_start() -> Self {
        Self { is_in_progress: true, ..Self::default() }
    }

    /// State after the API accepted the credentials.
    pub fn login_success(user: User) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
            ..Self::default()
        }
    }

    /// State after the API rejected the attempt. `message` is rendered
    /// verbatim by the login page.
    pub fn login_fail(message: String) -> Self {
        Self { error: Some(message), ..Self::default() }
    }

    /// Startup state restored from the persisted auth slice.
    pub fn rehydrated() -> Self {
        Self::from_slice(persist::load_auth_slice())
    }

    /// Map a persisted slice onto a fresh state. A slice claiming
    /// authentication without a user record is treated as signed-out.
    pub fn from_slice(slice: Option<AuthSlice>) -> Self {
        match slice {
            Some(AuthSlice { is_authenticated: true, user: Some(user) }) => {
                Self::login_success(user)
            }
            _ => Self::default(),
        }
    }

    /// Display name of the signed-in user, empty when anonymous.
    pub fn username(&self) -> String {
        self.user.as_ref().map(|u| u.name.clone()).unwrap_or_default()
    }
}

/// Dispatch a login attempt.
///
/// Synchronously moves the state to InProgress (so the UI can disable the
/// form before any await point), then resolves the API call in a local
/// task. On success the auth slice is persisted before the state flips to
/// Authenticated; on failure the message lands in `error`. The outcome is
/// never surfaced to the caller; observers read the signal.
pub fn login(auth: RwSignal<AuthState>, username: String, password: String) {
    auth.set(AuthState::login_start());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::login(&username, &password).await {
            Ok(user) => {
                persist::save_auth_slice(&AuthSlice::authenticated(user.clone()));
                auth.set(AuthState::login_success(user));
            }
            Err(err) => {
                log::warn!("login rejected: {err}");
                auth.set(AuthState::login_fail(err.message));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (username, password);
}

/// Dispatch a logout.
///
/// Persists the signed-out slice, resets the state to initial, then
/// notifies the API best-effort (result ignored).
pub fn logout(auth: RwSignal<AuthState>) {
    persist::save_auth_slice(&AuthSlice::logged_out());
    auth.set(AuthState::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async {
        crate::net::api::logout().await;
    });
}
