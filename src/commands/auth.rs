//! Auth Commands
//!
//! Frontend bindings for `/api/auth`.

use gloo_net::http::Request;

use super::{ApiError, ApiResult};

/// End the server-side session. The response body is not read.
pub async fn logout(url: &str) -> ApiResult<()> {
    let response = Request::post(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    log::debug!("[Logout] server session closed");
    Ok(())
}
