//! Report Commands
//!
//! Frontend bindings for `/api/reports`.

use gloo_net::http::Request;

use super::{ApiError, ApiResult};
use crate::models::{ApiEnvelope, DashboardData};

/// Fetch the dashboard snapshot.
///
/// The body is decoded whatever the status, since the backend reports
/// failures as `{"success": false}`; the status only matters when the
/// body is not JSON.
pub async fn dashboard(url: &str) -> ApiResult<ApiEnvelope<DashboardData>> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let ok = response.ok();
    let status = response.status();
    match response.json::<ApiEnvelope<DashboardData>>().await {
        Ok(envelope) => Ok(envelope),
        Err(_) if !ok => Err(ApiError::Status(status)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}
