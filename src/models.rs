//! Frontend Models
//!
//! Data structures matching the store backend's JSON payloads.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

// ========================
// Session
// ========================

/// Access tier of a logged-in user.
///
/// Roles the backend may add later are kept verbatim in `Other` so that
/// an unknown role produces an empty menu instead of a broken session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Manager,
    Staff,
    Other(String),
    #[default]
    Unset,
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Manager => "manager",
            Role::Staff => "staff",
            Role::Other(name) => name,
            Role::Unset => "",
        }
    }

    /// Label shown next to the username in the page header
    pub fn label(&self) -> &'static str {
        match self {
            Role::Manager => "管理员",
            _ => "店员",
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::from(value.as_str())
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            "manager" => Role::Manager,
            "staff" => Role::Staff,
            "" => Role::Unset,
            other => Role::Other(other.to_string()),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// Cached profile stored by the login page under the `user` key
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
}

impl User {
    /// "username (role label)" as displayed in the header
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.username, self.role.label())
    }
}

// ========================
// Menu
// ========================

/// One navigation entry; the full table lives in `menu`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

// ========================
// API
// ========================

/// Response wrapper used by every `/api` endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Number or numeric string (the backend serializes `Decimal` as a
/// string); any other value reads as absent.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    })
}

/// Falls back to the default when the value has an unexpected shape
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Keeps the rows that decode and drops the rest
fn lenient_rows<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let rows = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(rows) => rows,
        _ => return Ok(Vec::new()),
    };
    Ok(rows
        .into_iter()
        .filter_map(|row| serde_json::from_value(row).ok())
        .collect())
}

/// Order totals for one period
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SalesSummary {
    #[serde(default, deserialize_with = "lenient_number")]
    pub order_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_sales: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_profit: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct InventoryStats {
    #[serde(default, deserialize_with = "lenient_number")]
    pub zero_stock: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub low_stock: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_inventory_value: Option<f64>,
}

impl InventoryStats {
    /// Products that are out of stock or running low
    pub fn alert_count(&self) -> Option<f64> {
        Some(self.zero_stock? + self.low_stock?)
    }
}

/// Daily row of the seven-day sales trend
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SalesTrendPoint {
    #[serde(default, deserialize_with = "lenient")]
    pub sale_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub order_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_sales: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_profit: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TopProduct {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_quantity: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_sales: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_profit: Option<f64>,
}

/// Snapshot returned by `GET /api/reports/dashboard`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DashboardData {
    #[serde(default, deserialize_with = "lenient")]
    pub today_sales: Option<SalesSummary>,
    #[serde(default, deserialize_with = "lenient")]
    pub yesterday_sales: Option<SalesSummary>,
    #[serde(default, deserialize_with = "lenient")]
    pub this_month_sales: Option<SalesSummary>,
    #[serde(default, deserialize_with = "lenient")]
    pub last_month_sales: Option<SalesSummary>,
    #[serde(default, deserialize_with = "lenient")]
    pub inventory_stats: Option<InventoryStats>,
    #[serde(default, deserialize_with = "lenient_rows")]
    pub sales_trend: Vec<SalesTrendPoint>,
    #[serde(default, deserialize_with = "lenient_rows")]
    pub top_products: Vec<TopProduct>,
    /// Kept untyped: only a JSON number is shown on the page
    #[serde(default)]
    pub pending_orders: Option<serde_json::Value>,
}

impl DashboardData {
    pub fn today_total_sales(&self) -> Option<f64> {
        self.today_sales.as_ref()?.total_sales
    }

    pub fn month_total_profit(&self) -> Option<f64> {
        self.this_month_sales.as_ref()?.total_profit
    }

    pub fn stock_alerts(&self) -> Option<f64> {
        self.inventory_stats.as_ref()?.alert_count()
    }

    pub fn pending_orders(&self) -> Option<f64> {
        self.pending_orders.as_ref()?.as_f64()
    }
}
