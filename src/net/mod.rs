//! Networking for the Sweet Shop HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` holds the verb-shaped request helpers, `api` the endpoint
//! functions layered on them, `types` the wire DTOs, and `error` the
//! failure type every call returns.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
