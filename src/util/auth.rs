//! Shared auth route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior: anonymous
//! users bounce to `/login`, signed-in users bounce off the login page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Whether an unauthenticated visitor on a protected route should be sent
/// to `/login`. A login still in flight holds the redirect so a resolving
/// attempt isn't bounced mid-way.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.is_in_progress && !state.is_authenticated
}

/// Whether a visitor on the login page is already signed in and should be
/// sent home.
pub fn should_redirect_authed(state: &AuthState) -> bool {
    state.is_authenticated
}

/// Redirect to `/login` whenever no login is pending and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to `/` whenever the user becomes authenticated.
pub fn install_authed_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_authed(&auth.get()) {
            navigate("/", NavigateOptions::default());
        }
    });
}
