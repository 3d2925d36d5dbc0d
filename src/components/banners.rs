//! Inline outcome banners shared by the form and list views.
//!
//! Pages keep at most one of the two messages set at a time; starting a
//! new write clears both.

use leptos::prelude::*;

/// Inline error region rendered when `message` is set.
#[component]
pub fn ErrorBanner(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="banner banner--error">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}

/// Dismissable success banner; the close button clears the message.
#[component]
pub fn SuccessBanner(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="banner banner--success">
                <span>{move || message.get().unwrap_or_default()}</span>
                <button class="banner__dismiss" on:click=move |_| message.set(None)>
                    "\u{d7}"
                </button>
            </p>
        </Show>
    }
}
