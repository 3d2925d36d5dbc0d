//! Top bar displaying the page title, signed-in email, and logout.

use leptos::prelude::*;

use crate::state::session::{self, SessionState};

/// Top navigation bar for authenticated pages.
///
/// Logout is purely client-side: it drops the in-memory session, removes
/// both persisted entries, and returns to the login page.
#[component]
pub fn Navbar(title: &'static str) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let email = move || session.get().session.map_or_else(String::new, |s| s.email);

    let on_logout = move |_| {
        session.update(|s| s.logout());
        session::clear_persisted();
        #[cfg(feature = "hydrate")]
        {
            // Navigate to login via window.location for a clean state.
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/login");
            }
        }
    };

    view! {
        <div class="navbar">
            <h1 class="navbar__title">{title}</h1>
            <span class="navbar__spacer"></span>
            <span class="navbar__user">{email}</span>
            <button class="btn navbar__logout" on:click=on_logout>
                "Logout"
            </button>
        </div>
    }
}
