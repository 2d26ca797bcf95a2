//! Authenticated landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only protected route. It greets the signed-in user and owns
//! the logout control; anonymous visitors are bounced to `/login`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Home page — greeting plus logout.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate);

    // Resetting the state is enough to navigate: the unauth redirect
    // effect observes the cleared session and sends us to /login.
    let on_logout = move |_| crate::state::auth::logout(auth);

    view! {
        <Show
            when=move || auth.get().is_authenticated
            fallback=move || {
                view! {
                    <div class="home-page">
                        <p>"Redirecting to login..."</p>
                    </div>
                }
            }
        >
            <div class="home-page">
                <header class="home-page__header toolbar">
                    <span class="toolbar__self">{move || auth.get().username()}</span>
                    <span class="toolbar__spacer"></span>
                    <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>
                <main class="home-page__body">
                    <h1>{move || format!("Welcome, {}", auth.get().username())}</h1>
                </main>
            </div>
        </Show>
    }
}
