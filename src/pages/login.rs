//! Login page exchanging email + password for a bearer credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and registration share the same completion sequence: exchange
//! credentials for a token, decode its claims into a session, store and
//! persist the session, then land on the role-appropriate page. The
//! sequence lives here; the register page calls into it after creating
//! the account.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "hydrate"))]
use crate::state::session::Session;
use crate::state::session::SessionState;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::claims;
use crate::util::guard;

/// Trim the email and require both fields.
pub(crate) fn validate_credentials(
    email: &str,
    password: &str,
) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Build a session from a fresh bearer credential.
///
/// The subject claim becomes the session email, so the identity always
/// reflects what the server signed rather than what the form held.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn session_from_token(token: &str) -> Result<Session, claims::DecodeError> {
    let claims = claims::decode(token)?;
    Ok(Session {
        email: claims.sub,
        role: claims.role,
        credential: token.to_owned(),
    })
}

/// Exchange credentials, decode claims, and populate the session store.
///
/// On success the session is stored and persisted and the caller gets the
/// landing route for the new role. Nothing is written on failure, so a
/// retry starts from a clean state. `fallback` is used when the server
/// reports no detail message.
#[cfg(feature = "hydrate")]
pub(crate) async fn complete_login(
    session: RwSignal<SessionState>,
    email: &str,
    password: &str,
    fallback: &str,
) -> Result<&'static str, String> {
    let token = crate::net::api::login(email, password)
        .await
        .map_err(|err| err.message_or(fallback))?;
    let new_session = session_from_token(&token.access_token).map_err(|err| err.to_string())?;
    let landing = guard::landing_route(new_session.role);
    crate::state::session::persist(&new_session);
    session.update(|s| s.login(new_session));
    Ok(landing)
}

/// Login form page.
///
/// Already signed-in visitors are forwarded to their landing view instead
/// of seeing the form again.
#[component]
pub fn LoginPage() -> impl IntoView {
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
                match complete_login(
                    session,
                    &email_value,
                    &password_value,
                    "Login failed. Please try again.",
                )
                .await
                {
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
                <p class="auth-card__subtitle">"Login"</p>
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
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>
                <p class="auth-card__footer">
                    "Don't have an account? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
