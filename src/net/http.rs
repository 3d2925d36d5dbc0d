//! Verb-shaped HTTP helpers for talking to the Sweet Shop API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, one attempt per
//! call with no retry or timeout beyond the browser's own. Server-side
//! (SSR): stubs returning [`ApiError::Network`] since requests are only
//! meaningful in the browser.
//!
//! Every helper attaches `Authorization: Bearer <credential>` when a
//! non-empty credential is supplied. The header is advisory; the API
//! decides whether the credential is accepted.

#![allow(clippy::unused_async)]

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;

#[cfg(feature = "hydrate")]
fn with_bearer(
    builder: gloo_net::http::RequestBuilder,
    credential: Option<&str>,
) -> gloo_net::http::RequestBuilder {
    match credential {
        Some(credential) if !credential.is_empty() => {
            builder.header("Authorization", &format!("Bearer {credential}"))
        }
        _ => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn status_error(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let detail = response.text().await.ok().and_then(|body| super::error::extract_detail(&body));
    ApiError::Status { status, detail }
}

#[cfg(feature = "hydrate")]
async fn decode_json<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(status_error(response).await);
    }
    response.json::<T>().await.map_err(|err| ApiError::Body(err.to_string()))
}

#[cfg(not(feature = "hydrate"))]
fn server_stub() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

/// `GET path`, decoding the JSON response body.
///
/// # Errors
///
/// Returns an error if the request cannot be sent, the server responds
/// with a non-2xx status, or the body does not decode.
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    credential: Option<&str>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = with_bearer(gloo_net::http::Request::get(path), credential)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode_json(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, credential);
        Err(server_stub())
    }
}

/// `GET path?{params}`, decoding the JSON response body.
///
/// # Errors
///
/// Returns an error if the request cannot be sent, the server responds
/// with a non-2xx status, or the body does not decode.
pub async fn get_json_with_query<T: DeserializeOwned>(
    path: &str,
    params: &[(&str, &str)],
    credential: Option<&str>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = with_bearer(
            gloo_net::http::Request::get(path).query(params.iter().copied()),
            credential,
        )
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
        decode_json(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, params, credential);
        Err(server_stub())
    }
}

/// `POST path` with a JSON body, decoding the JSON response body.
///
/// # Errors
///
/// Returns an error if the body does not serialize, the request cannot
/// be sent, the server responds with a non-2xx status, or the response
/// body does not decode.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    credential: Option<&str>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = with_bearer(gloo_net::http::Request::post(path), credential)
            .json(body)
            .map_err(|err| ApiError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode_json(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body, credential);
        Err(server_stub())
    }
}

/// `PUT path` with a JSON body, decoding the JSON response body.
///
/// # Errors
///
/// Returns an error if the body does not serialize, the request cannot
/// be sent, the server responds with a non-2xx status, or the response
/// body does not decode.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    credential: Option<&str>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = with_bearer(gloo_net::http::Request::put(path), credential)
            .json(body)
            .map_err(|err| ApiError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode_json(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body, credential);
        Err(server_stub())
    }
}

/// `DELETE path`; the response body (if any) is discarded.
///
/// # Errors
///
/// Returns an error if the request cannot be sent or the server
/// responds with a non-2xx status.
pub async fn delete(path: &str, credential: Option<&str>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = with_bearer(gloo_net::http::Request::delete(path), credential)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if !response.ok() {
            return Err(status_error(response).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, credential);
        Err(server_stub())
    }
}

/// `POST path` with a form-urlencoded body, decoding the JSON response.
///
/// Used for the login exchange, which takes an OAuth2 password form
/// rather than JSON.
///
/// # Errors
///
/// Returns an error if the request cannot be sent, the server responds
/// with a non-2xx status, or the response body does not decode.
pub async fn post_form<T: DeserializeOwned>(path: &str, body: String) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gloo_net::http::Request::post(path)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|err| ApiError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode_json(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(server_stub())
    }
}
