//! Login page with username/password form and error display.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::text_field::TextField;
use crate::state::auth::AuthState;
use crate::util::auth::install_authed_redirect;

/// Client-side submission guard: both fields must be non-empty. The
/// username is trimmed; the password is taken as typed.
fn validate_login_input(
    username: &str,
    password: &str,
) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Login page — dispatches the login action and renders the last failure.
/// Redirects to `/` once the session becomes authenticated (including a
/// rehydrated one).
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    install_authed_redirect(auth, navigate);

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);

    let in_progress = move || auth.get().is_in_progress;
    let auth_error = move || auth.get().error;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if in_progress() {
            return;
        }
        match validate_login_input(&username.get(), &password.get()) {
            Ok((username_value, password_value)) => {
                form_error.set(None);
                crate::state::auth::login(auth, username_value, password_value);
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Portal"</h1>
                <form class="login-form" novalidate on:submit=on_submit>
                    <TextField label="Username" name="username" value=username/>
                    <TextField label="Password" name="password" value=password masked=true/>

                    <Show when=move || form_error.get().is_some()>
                        <p class="login-message login-message--error">
                            {move || form_error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <Show when=move || auth_error().is_some()>
                        <p class="login-message login-message--error">
                            {move || auth_error().unwrap_or_default()}
                        </p>
                    </Show>

                    <button class="login-button" type="submit" disabled=in_progress>
                        {move || if in_progress() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <p class="login-card__hint">
                    "For login use \"eve.holt@reqres.in\" username with any password"
                </p>
            </div>
        </div>
    }
}
