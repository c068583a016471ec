//! Backend API client.
//!
//! Two JSON endpoints provide all data; both are consumed read-only.
//!
//! **Module Organization:**
//! - `mod.rs`: error type and base-URL resolution
//! - `client.rs`: typed HTTP fetching with reqwest

use thiserror::Error;

pub mod client;

pub use client::{fetch_provinces, fetch_schedule};

/// Errors that can occur while talking to the backend.
///
/// The UI never distinguishes these beyond "failed"; only the `Display`
/// string is surfaced (directory domain) or logged (schedule domain).
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// HTTP request failed (network error, timeout, etc.).
    #[error("request failed: {0}")]
    Request(String),

    /// Server answered with a non-success status code.
    #[error("server returned HTTP {0}")]
    Status(u16),

    /// Response body was not decodable into the expected shape.
    #[error("response decoding failed: {0}")]
    Decode(String),
}

/// Base URL the two endpoints are resolved against.
///
/// On the web the backend lives on the hosting origin; reqwest needs
/// absolute URLs, so the origin is read from the browser location.
#[cfg(target_arch = "wasm32")]
pub(crate) fn api_base() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

/// Base URL the two endpoints are resolved against.
///
/// Desktop builds have no hosting origin, so the base comes from the
/// `MUSAFIR_API_BASE` environment variable.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn api_base() -> String {
    std::env::var("MUSAFIR_API_BASE").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string())
}
