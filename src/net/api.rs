//! Endpoint functions for the Sweet Shop API.
//!
//! Thin wrappers over the verb helpers in [`super::http`]: one function
//! per endpoint, taking the caller's bearer credential where the endpoint
//! is authenticated. Fallback error copy lives at the call sites in the
//! page modules, not here.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http;
use super::types::{RegisteredUser, Sweet, SweetPayload, TokenResponse};

const REGISTER_ENDPOINT: &str = "/api/auth/register";
const LOGIN_ENDPOINT: &str = "/api/auth/login";
const SWEETS_ENDPOINT: &str = "/api/sweets";
const SEARCH_ENDPOINT: &str = "/api/sweets/search";

fn sweet_endpoint(id: i64) -> String {
    format!("/api/sweets/{id}")
}

fn purchase_endpoint(id: i64) -> String {
    format!("/api/sweets/{id}/purchase")
}

fn restock_endpoint(id: i64) -> String {
    format!("/api/sweets/{id}/restock")
}

/// Form-urlencoded body for the login exchange. The server takes an
/// OAuth2 password form, so the email travels as `username`.
fn login_body(email: &str, password: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("username", email)
        .append_pair("password", password)
        .finish()
}

/// JSON body for the purchase and restock endpoints.
fn quantity_body(quantity: u32) -> serde_json::Value {
    serde_json::json!({ "quantity": quantity })
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns an error if the request fails or the email is already registered.
pub async fn register(email: &str, password: &str) -> Result<RegisteredUser, ApiError> {
    let payload = serde_json::json!({ "email": email, "password": password });
    http::post_json(REGISTER_ENDPOINT, &payload, None).await
}

/// Exchange credentials for a bearer token via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error if the request fails or the credentials are rejected.
pub async fn login(email: &str, password: &str) -> Result<TokenResponse, ApiError> {
    http::post_form(LOGIN_ENDPOINT, login_body(email, password)).await
}

/// Fetch the full inventory via `GET /api/sweets`.
///
/// # Errors
///
/// Returns an error if the request fails or the credential is rejected.
pub async fn fetch_sweets(credential: Option<&str>) -> Result<Vec<Sweet>, ApiError> {
    http::get_json(SWEETS_ENDPOINT, credential).await
}

/// Search the inventory by name or category via `GET /api/sweets/search`.
///
/// The query travels verbatim; blank-query handling is the caller's call.
///
/// # Errors
///
/// Returns an error if the request fails or the credential is rejected.
pub async fn search_sweets(credential: Option<&str>, query: &str) -> Result<Vec<Sweet>, ApiError> {
    http::get_json_with_query(SEARCH_ENDPOINT, &[("query", query)], credential).await
}

/// Create an inventory item via `POST /api/sweets`. Admin only.
///
/// # Errors
///
/// Returns an error if the request fails or the caller is not an admin.
pub async fn create_sweet(
    credential: Option<&str>,
    payload: &SweetPayload,
) -> Result<Sweet, ApiError> {
    http::post_json(SWEETS_ENDPOINT, payload, credential).await
}

/// Replace an inventory item via `PUT /api/sweets/{id}`. Admin only.
///
/// # Errors
///
/// Returns an error if the request fails, the item does not exist, or
/// the caller is not an admin.
pub async fn update_sweet(
    credential: Option<&str>,
    id: i64,
    payload: &SweetPayload,
) -> Result<Sweet, ApiError> {
    http::put_json(&sweet_endpoint(id), payload, credential).await
}

/// Delete an inventory item via `DELETE /api/sweets/{id}`. Admin only.
///
/// # Errors
///
/// Returns an error if the request fails, the item does not exist, or
/// the caller is not an admin.
pub async fn delete_sweet(credential: Option<&str>, id: i64) -> Result<(), ApiError> {
    http::delete(&sweet_endpoint(id), credential).await
}

/// Buy `quantity` units via `POST /api/sweets/{id}/purchase`.
///
/// The server decrements stock and returns the updated item; callers
/// re-fetch the list rather than patching their copy from it.
///
/// # Errors
///
/// Returns an error if the request fails or stock is insufficient.
pub async fn purchase_sweet(
    credential: Option<&str>,
    id: i64,
    quantity: u32,
) -> Result<Sweet, ApiError> {
    http::post_json(&purchase_endpoint(id), &quantity_body(quantity), credential).await
}

/// Add `quantity` units via `POST /api/sweets/{id}/restock`. Admin only.
///
/// # Errors
///
/// Returns an error if the request fails, the item does not exist, or
/// the caller is not an admin.
pub async fn restock_sweet(
    credential: Option<&str>,
    id: i64,
    quantity: u32,
) -> Result<Sweet, ApiError> {
    http::post_json(&restock_endpoint(id), &quantity_body(quantity), credential).await
}
