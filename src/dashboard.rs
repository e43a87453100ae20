//! Dashboard Rendering
//!
//! Writes the home page figures into their elements.

use crate::config::ElementIds;
use crate::format::format_money;
use crate::models::DashboardData;
use crate::surface::Surface;

/// What a dashboard load did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardOutcome {
    /// Figures were written; `written` lists the element ids updated
    Rendered { written: Vec<String> },
    /// Backend answered `success: false` or without data
    Rejected,
    /// Request or decoding failed
    Failed,
}

/// Write every figure that has both a value and an element.
/// Returns the ids that were updated.
pub fn render_dashboard(surface: &dyn Surface, ids: &ElementIds, data: &DashboardData) -> Vec<String> {
    let figures = [
        (&ids.today_sales, data.today_total_sales().map(|v| format_money(Some(v)))),
        (&ids.stock_alerts, data.stock_alerts().map(format_count)),
        (&ids.monthly_profit, data.month_total_profit().map(|v| format_money(Some(v)))),
        (&ids.pending_orders, data.pending_orders().map(format_count)),
    ];

    figures
        .into_iter()
        .filter_map(|(id, text)| {
            let text = text?;
            surface.set_text(id, &text).then(|| id.clone())
        })
        .collect()
}

/// Plain number as JavaScript prints it (`5`, not `5.0`)
fn format_count(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeSurface;

    const ALL: [&str; 4] = ["todaySales", "stockAlerts", "monthlyProfit", "pendingOrders"];

    fn data(json: &str) -> DashboardData {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_render_all_figures() {
        let surface = FakeSurface::with_elements(&ALL);
        let written = render_dashboard(
            &surface,
            &ElementIds::default(),
            &data(
                r#"{"today_sales":{"total_sales":123.4},
                    "inventory_stats":{"zero_stock":2,"low_stock":3},
                    "this_month_sales":{"total_profit":500},
                    "pending_orders":7}"#,
            ),
        );
        assert_eq!(written.len(), 4);
        assert_eq!(surface.text("todaySales").as_deref(), Some("¥123.40"));
        assert_eq!(surface.text("stockAlerts").as_deref(), Some("5"));
        assert_eq!(surface.text("monthlyProfit").as_deref(), Some("¥500.00"));
        assert_eq!(surface.text("pendingOrders").as_deref(), Some("7"));
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        let surface = FakeSurface::with_elements(&["stockAlerts"]);
        let written = render_dashboard(
            &surface,
            &ElementIds::default(),
            &data(r#"{"today_sales":{"total_sales":1},"inventory_stats":{"zero_stock":0,"low_stock":4}}"#),
        );
        assert_eq!(written, vec!["stockAlerts".to_string()]);
        assert_eq!(surface.text("stockAlerts").as_deref(), Some("4"));
    }

    #[test]
    fn test_missing_fields_are_skipped() {
        let surface = FakeSurface::with_elements(&ALL);
        let written = render_dashboard(
            &surface,
            &ElementIds::default(),
            &data(r#"{"inventory_stats":{"zero_stock":2},"this_month_sales":{"total_profit":12.5}}"#),
        );
        assert_eq!(written, vec!["monthlyProfit".to_string()]);
        assert_eq!(surface.text("todaySales"), None);
        assert_eq!(surface.text("stockAlerts"), None);
        assert_eq!(surface.text("monthlyProfit").as_deref(), Some("¥12.50"));
    }

    #[test]
    fn test_non_numeric_pending_orders_left_alone() {
        let surface = FakeSurface::with_elements(&ALL);
        render_dashboard(&surface, &ElementIds::default(), &data(r#"{"pending_orders":"7"}"#));
        assert_eq!(surface.text("pendingOrders"), None);
        render_dashboard(&surface, &ElementIds::default(), &data(r#"{"pending_orders":null}"#));
        assert_eq!(surface.text("pendingOrders"), None);
    }
}
