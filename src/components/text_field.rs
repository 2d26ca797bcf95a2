//! Labeled text input bound to an `RwSignal<String>`.

use leptos::prelude::*;

/// Controlled text field: the signal is the single source of truth for the
/// input value. Set `masked` for password entry.
#[component]
pub fn TextField(
    /// Visible label above the input.
    label: &'static str,
    /// `name` attribute for the underlying input element.
    name: &'static str,
    /// Value signal owned by the parent form.
    value: RwSignal<String>,
    /// Render as a password input.
    #[prop(optional)]
    masked: bool,
) -> impl IntoView {
    let input_type = if masked { "password" } else { "text" };

    view! {
        <label class="text-field">
            <span class="text-field__label">{label}</span>
            <input
                class="text-field__input"
                type=input_type
                name=name
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
