//! Session store for the signed-in Sweet Shop user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware components read this state to coordinate
//! redirects and role-dependent rendering. The identity is mirrored to
//! `localStorage` so a page reload restores the session without a fresh
//! login; the bearer credential is persisted under its own key as a raw
//! string so it can be attached to requests without re-parsing.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

/// `localStorage` key for the serialized identity mirror.
pub const IDENTITY_KEY: &str = "sweetshop_user";

/// `localStorage` key for the raw bearer credential.
pub const CREDENTIAL_KEY: &str = "sweetshop_token";

/// Account role as carried in the credential's claims payload.
///
/// The API historically spelled the customer role `USER`; both spellings
/// deserialize to [`Role::Customer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    #[serde(alias = "USER")]
    Customer,
    Admin,
}

impl Role {
    /// Whether this role may reach the admin surface.
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// A signed-in identity plus its bearer credential.
///
/// Only `email` and `role` are serialized into the identity mirror; the
/// credential is persisted separately and skipped here so the mirror never
/// duplicates it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub role: Role,
    #[serde(skip)]
    pub credential: String,
}

/// Session state shared through context as `RwSignal<SessionState>`.
///
/// The state starts in `loading` and stays there until the client-side
/// restore attempt has run, so server-rendered and hydrating markup agree
/// regardless of what `localStorage` holds. Guards make no decision while
/// `loading` is set.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// Current identity, or `None` when signed out.
    pub session: Option<Session>,
    /// Whether the restore attempt is still pending.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl SessionState {
    /// State restored from durable storage; always past loading.
    pub fn restored() -> Self {
        Self { session: restore(), loading: false }
    }

    /// Install `session` as the current identity.
    pub fn login(&mut self, session: Session) {
        self.session = Some(session);
        self.loading = false;
    }

    /// Drop the current identity.
    pub fn logout(&mut self) {
        self.session = None;
        self.loading = false;
    }

    /// Bearer credential of the current session, if any.
    pub fn credential(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.credential.clone())
    }
}

/// Write the identity mirror and raw credential to durable storage.
pub fn persist(session: &Session) {
    storage::save_json(IDENTITY_KEY, session);
    storage::save_string(CREDENTIAL_KEY, &session.credential);
}

/// Remove both persisted entries together.
pub fn clear_persisted() {
    storage::remove(IDENTITY_KEY);
    storage::remove(CREDENTIAL_KEY);
}

/// Read the persisted session back, keyed on the identity mirror.
///
/// A missing credential entry restores with an empty bearer string; the
/// next authenticated request then fails and surfaces as an ordinary API
/// error. No expiry check happens here, so a stale credential is only
/// discovered the same way.
pub fn restore() -> Option<Session> {
    let mut session: Session = storage::load_json(IDENTITY_KEY)?;
    session.credential = storage::load_string(CREDENTIAL_KEY).unwrap_or_default();
    Some(session)
}
