//! Client-side route protection for session- and role-gated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page applies the same decision before rendering, and
//! auth pages apply the inverse so signed-in users skip the forms. The
//! API stays the real authorization boundary; a hand-edited URL shows at
//! most an empty shell before the server rejects its requests.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Role, Session, SessionState};

/// Outcome of checking a session against a navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested page.
    Allow,
    /// No session; send to the login page.
    RedirectToLogin,
    /// Signed in but not authorized; send to the customer dashboard.
    RedirectToDashboard,
}

/// Decide whether `session` may view a target.
///
/// Checked in order: a missing session always redirects to login, and an
/// admin requirement is only consulted once a session exists.
pub fn decide(session: Option<&Session>, requires_admin: bool) -> GuardDecision {
    match session {
        None => GuardDecision::RedirectToLogin,
        Some(s) if requires_admin && !s.role.is_admin() => GuardDecision::RedirectToDashboard,
        Some(_) => GuardDecision::Allow,
    }
}

/// Decide over the full session state.
///
/// Returns `None` while the restore attempt is pending; nothing redirects
/// until the stored session has had a chance to load.
pub fn decide_state(state: &SessionState, requires_admin: bool) -> Option<GuardDecision> {
    if state.loading {
        return None;
    }
    Some(decide(state.session.as_ref(), requires_admin))
}

/// Route a redirect decision resolves to, if any.
pub fn redirect_target(decision: GuardDecision) -> Option<&'static str> {
    match decision {
        GuardDecision::Allow => None,
        GuardDecision::RedirectToLogin => Some("/login"),
        GuardDecision::RedirectToDashboard => Some("/dashboard"),
    }
}

/// Landing route for a signed-in `role`.
pub fn landing_route(role: Role) -> &'static str {
    if role.is_admin() { "/admin" } else { "/dashboard" }
}

/// Redirect away whenever the current session may not view this page.
pub fn install_route_guard<F>(session: RwSignal<SessionState>, requires_admin: bool, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if let Some(target) = decide_state(&state, requires_admin).and_then(redirect_target) {
            navigate(target, NavigateOptions::default());
        }
    });
}

/// Send an already signed-in user from an auth page to their landing view.
pub fn install_authenticated_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        if let Some(s) = state.session {
            navigate(landing_route(s.role), NavigateOptions::default());
        }
    });
}
