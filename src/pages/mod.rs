//! Route-level pages.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped orchestration (fetching, mutations,
//! redirect guards) and delegates repeated rendering to `components`.
//! Pure validation and planning helpers sit next to the page that uses
//! them so they can be tested without a browser.

pub mod admin;
pub mod dashboard;
pub mod login;
pub mod register;
