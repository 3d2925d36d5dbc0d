//! Wire DTOs for the Sweet Shop API.
//!
//! These mirror the server's JSON payloads field for field so serde does
//! the whole translation; views render straight from them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::session::Role;

/// An inventory item as returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sweet {
    /// Server-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Free-form category label.
    pub category: String,
    /// Unit price; never negative.
    pub price: f64,
    /// Units in stock; never negative.
    pub quantity: u32,
}

impl Sweet {
    /// Whether no stock remains.
    pub fn out_of_stock(&self) -> bool {
        self.quantity == 0
    }
}

/// Request body for creating or replacing an inventory item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweetPayload {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

/// Response of the login exchange.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    /// Opaque bearer credential.
    pub access_token: String,
    /// Scheme hint from the server, normally `bearer`.
    #[serde(default)]
    pub token_type: String,
}

/// Newly created account as returned by the register endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RegisteredUser {
    pub id: i64,
    pub email: String,
    pub role: Role,
}
