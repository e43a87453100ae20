//! Backend Commands
//!
//! Frontend bindings to the store's HTTP API, organized by domain.

mod auth;
mod reports;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::ShellConfig;
use crate::models::{ApiEnvelope, DashboardData};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("unreadable response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Backend calls the page shell makes
#[async_trait(?Send)]
pub trait BackendApi {
    /// `POST /api/auth/logout`
    async fn logout(&self) -> ApiResult<()>;

    /// `GET /api/reports/dashboard`
    async fn dashboard(&self) -> ApiResult<ApiEnvelope<DashboardData>>;
}

/// `BackendApi` over `fetch`, same origin unless `api_base` is set
#[derive(Debug, Clone)]
pub struct HttpBackend {
    logout_url: String,
    dashboard_url: String,
}

impl HttpBackend {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            logout_url: config.endpoint(&config.logout_path),
            dashboard_url: config.endpoint(&config.dashboard_path),
        }
    }
}

#[async_trait(?Send)]
impl BackendApi for HttpBackend {
    async fn logout(&self) -> ApiResult<()> {
        auth::logout(&self.logout_url).await
    }

    async fn dashboard(&self) -> ApiResult<ApiEnvelope<DashboardData>> {
        reports::dashboard(&self.dashboard_url).await
    }
}
