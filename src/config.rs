//! Shell Configuration
//!
//! Routes, storage keys and element ids the shell depends on. Pages may
//! override any of them with a JSON block:
//! `<script id="shell-config" type="application/json">{...}</script>`.

use serde::{Deserialize, Serialize};

/// Id of the optional JSON configuration block
pub const CONFIG_ELEMENT_ID: &str = "shell-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Prefix prepended to API paths ("" means same origin)
    pub api_base: String,
    pub login_url: String,
    pub logout_path: String,
    pub dashboard_path: String,
    pub storage: StorageKeys,
    pub elements: ElementIds,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            login_url: "/login".to_string(),
            logout_path: "/api/auth/logout".to_string(),
            dashboard_path: "/api/reports/dashboard".to_string(),
            storage: StorageKeys::default(),
            elements: ElementIds::default(),
        }
    }
}

impl ShellConfig {
    /// Parse a configuration block; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Absolute URL of an API path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}

/// Keys used in the browser's persistent storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub logged_in: String,
    pub user: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            logged_in: "isLoggedIn".to_string(),
            user: "user".to_string(),
        }
    }
}

/// Page element ids the shell writes into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub menu_list: String,
    pub user_info: String,
    pub logout_button: String,
    pub today_sales: String,
    pub stock_alerts: String,
    pub monthly_profit: String,
    pub pending_orders: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            menu_list: "menuList".to_string(),
            user_info: "userInfo".to_string(),
            logout_button: "logoutBtn".to_string(),
            today_sales: "todaySales".to_string(),
            stock_alerts: "stockAlerts".to_string(),
            monthly_profit: "monthlyProfit".to_string(),
            pending_orders: "pendingOrders".to_string(),
        }
    }
}
