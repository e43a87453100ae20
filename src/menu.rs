//! Navigation Menu
//!
//! Static role → menu table and its `<li>` markup.

use askama::Template;

use crate::models::{MenuItem, Role};

const SALES: MenuItem = MenuItem { id: "sales", name: "商品销售", icon: "💰", url: "/sales" };
const INVENTORY: MenuItem = MenuItem { id: "inventory", name: "库存查询", icon: "📦", url: "/inventory" };
const PRODUCTS: MenuItem = MenuItem { id: "products", name: "商品管理", icon: "🛍️", url: "/products" };
const PURCHASE: MenuItem = MenuItem { id: "purchase", name: "采购管理", icon: "📋", url: "/purchase" };
const PAYABLES: MenuItem = MenuItem { id: "payables", name: "应付结算", icon: "💳", url: "/payables" };
const INCOMING: MenuItem = MenuItem { id: "incoming", name: "进货管理", icon: "📥", url: "/incoming" };
const CUSTOMERS: MenuItem = MenuItem { id: "customers", name: "客户管理", icon: "👥", url: "/customers" };
const SUPPLIERS: MenuItem = MenuItem { id: "suppliers", name: "供应商管理", icon: "🏢", url: "/suppliers" };
const STOCKCHECK: MenuItem = MenuItem { id: "stockcheck", name: "库存盘点", icon: "📊", url: "/stockcheck" };
const REPORTS: MenuItem = MenuItem { id: "reports", name: "报表分析", icon: "📈", url: "/reports" };

pub static MANAGER_MENU: [MenuItem; 10] = [
    SALES, INVENTORY, PRODUCTS, PURCHASE, PAYABLES, INCOMING, CUSTOMERS, SUPPLIERS, STOCKCHECK,
    REPORTS,
];

pub static STAFF_MENU: [MenuItem; 4] = [SALES, INVENTORY, INCOMING, STOCKCHECK];

/// Ordered menu for a role; unknown roles get nothing
pub fn menu_for(role: &Role) -> &'static [MenuItem] {
    match role {
        Role::Manager => &MANAGER_MENU,
        Role::Staff => &STAFF_MENU,
        _ => &[],
    }
}

/// A menu item as it appears on a given page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub item: &'static MenuItem,
    pub active: bool,
}

/// Menu entries for `role`, with the item whose id is `current_page` active
pub fn menu_entries(role: &Role, current_page: &str) -> Vec<MenuEntry> {
    menu_for(role)
        .iter()
        .map(|item| MenuEntry { item, active: item.id == current_page })
        .collect()
}

#[derive(Template)]
#[template(path = "menu.html")]
struct MenuTemplate<'a> {
    entries: &'a [MenuEntry],
}

/// Markup placed inside the `menuList` element
pub fn render_menu(entries: &[MenuEntry]) -> Result<String, askama::Error> {
    MenuTemplate { entries }.render()
}
