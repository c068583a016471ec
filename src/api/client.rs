//! Typed fetches against the two backend endpoints.

use dioxus::logger::tracing::{error, info};

use crate::catalog::Province;
use crate::schedule::ScheduleResponse;

use super::{api_base, ApiError};

/// Fetches the full province directory (`GET /province`).
///
/// Issued exactly once at mount; there is no client-side timeout or
/// retry, and a failure here is terminal for the session.
pub async fn fetch_provinces() -> Result<Vec<Province>, ApiError> {
    let url = format!("{}/province", api_base());
    info!("Fetching province directory from {}", url);

    let response = reqwest::get(&url)
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !response.status().is_success() {
        let err = ApiError::Status(response.status().as_u16());
        error!("Province fetch failed: {}", err);
        return Err(err);
    }

    let provinces: Vec<Province> = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    info!("Province directory loaded ({} provinces)", provinces.len());
    Ok(provinces)
}

/// Fetches the prayer schedule for a coordinate
/// (`GET /prayer?latitude=..&longitude=..`).
pub async fn fetch_schedule(latitude: f64, longitude: f64) -> Result<ScheduleResponse, ApiError> {
    let url = format!(
        "{}/prayer?latitude={}&longitude={}",
        api_base(),
        latitude,
        longitude
    );
    info!("Fetching prayer schedule from {}", url);

    let response = reqwest::get(&url)
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !response.status().is_success() {
        let err = ApiError::Status(response.status().as_u16());
        error!("Schedule fetch failed: {}", err);
        return Err(err);
    }

    let schedule: ScheduleResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    info!("Prayer schedule loaded ({} days)", schedule.prayers.len());
    Ok(schedule)
}
