//! Musafir - Province and prayer-time explorer for Indonesia.
//!
//! A Dioxus application that lists administrative provinces, expands one
//! province at a time to show its cities, and fetches a short-range
//! prayer-time schedule for a selected city's coordinate, displayed in a
//! modal overlay.
//!
//! # Architecture
//!
//! - **API**: typed reqwest calls against the two backend JSON endpoints
//!   (`/province` and `/prayer?latitude=..&longitude=..`)
//! - **Catalog**: province/city domain types plus the pure filtering,
//!   aggregation, and expansion-toggle functions
//! - **Schedule**: prayer-day types, the 7-day display cap, and the
//!   stale-response guard for late fetch completions
//! - **Components**: the Dioxus component tree; all UI state lives in
//!   signals owned by the top-level [`components::App`]
//!
//! # Platform Support
//!
//! - **Web (WASM)**: primary target; API calls are relative to the
//!   hosting origin
//! - **Desktop**: API base taken from the `MUSAFIR_API_BASE` environment
//!   variable

pub mod api;
pub mod catalog;
pub mod components;
pub mod schedule;
