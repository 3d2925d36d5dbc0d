//! Registration page creating an account and signing it in.
//!
//! Registration is a two-call sequence: create the account, then run the
//! same login completion the login page uses. Failures from either call
//! surface in one inline error region and nothing is stored until both
//! calls succeed, so a failed second call leaves the visitor signed out
//! with the account already created.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::guard;

use super::login::validate_credentials;

#[cfg(feature = "hydrate")]
const REGISTER_FALLBACK: &str = "Registration failed. Please try again.";

/// Registration form page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_authenticated_redirect(session, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_credentials(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = match crate::net::api::register(&email_value, &password_value).await
                {
                    Ok(_) => {
                        super::login::complete_login(
                            session,
                            &email_value,
                            &password_value,
                            REGISTER_FALLBACK,
                        )
                        .await
                    }
                    Err(err) => Err(err.message_or(REGISTER_FALLBACK)),
                };
                match outcome {
                    Ok(landing) => navigate(landing, NavigateOptions::default()),
                    Err(message) => error.set(Some(message)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sweet Shop"</h1>
                <p class="auth-card__subtitle">"Register"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>
                <p class="auth-card__footer">
                    "Already have an account? " <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
