//! JavaScript Exports
//!
//! Functions page scripts call, under their JavaScript names.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::browser::{browser_shell, page_name, ElementSlot};
use crate::format;
use crate::models::{Role, User};
use crate::surface::Slot;

fn user_to_js(user: Option<User>) -> JsValue {
    user.and_then(|user| serde_wasm_bindgen::to_value(&user).ok())
        .unwrap_or(JsValue::NULL)
}

/// Logged-in user as a plain object, or `null` after redirecting
#[wasm_bindgen(js_name = checkLogin)]
pub fn check_login() -> JsValue {
    user_to_js(browser_shell().and_then(|shell| shell.check_login()))
}

#[wasm_bindgen(js_name = generateMenu)]
pub fn generate_menu(role: Option<String>, current_page: Option<String>) {
    if let Some(shell) = browser_shell() {
        shell.generate_menu(&role_arg(role.as_deref()), current_page.as_deref().unwrap_or(""));
    }
}

/// `undefined`/`null` roles get the empty menu
fn role_arg(role: Option<&str>) -> Role {
    role.map(Role::from).unwrap_or_default()
}

#[wasm_bindgen(js_name = initCommonPage)]
pub fn init_common_page(current_page: Option<String>) -> JsValue {
    user_to_js(
        browser_shell()
            .and_then(|shell| shell.init_common_page(current_page.as_deref().unwrap_or(""))),
    )
}

#[wasm_bindgen]
pub async fn logout() {
    if let Some(shell) = browser_shell() {
        shell.logout().await;
    }
}

#[wasm_bindgen(js_name = loadDashboardData)]
pub async fn load_dashboard_data() {
    if let Some(shell) = browser_shell() {
        shell.load_dashboard_data().await;
    }
}

/// Accepts strings, `Date` objects and epoch milliseconds
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(value: JsValue) -> String {
    format::format_date(date_text(&value).as_deref())
}

fn date_text(value: &JsValue) -> Option<String> {
    if value.is_falsy() {
        return None;
    }
    if let Some(text) = value.as_string() {
        return Some(text);
    }
    let date = match value.dyn_ref::<js_sys::Date>() {
        Some(date) => date.clone(),
        None => js_sys::Date::new(value),
    };
    if date.get_time().is_nan() {
        return None;
    }
    Some(date.to_iso_string().into())
}

#[wasm_bindgen(js_name = formatMoney)]
pub fn format_money(value: JsValue) -> String {
    let amount = value
        .as_f64()
        .or_else(|| value.as_string().and_then(|text| format::parse_amount(&text)));
    format::format_money(amount)
}

#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading(element: Option<Element>) {
    let slot = element.map(ElementSlot);
    format::show_loading(slot.as_ref().map(|s| s as &dyn Slot));
}

#[wasm_bindgen(js_name = showError)]
pub fn show_error(message: &str, container: Option<Element>) {
    let slot = container.map(ElementSlot);
    format::show_error(message, slot.as_ref().map(|s| s as &dyn Slot));
}

#[wasm_bindgen(js_name = showSuccess)]
pub fn show_success(message: &str, container: Option<Element>) {
    let slot = container.map(ElementSlot);
    format::show_success(message, slot.as_ref().map(|s| s as &dyn Slot));
}

/// Run the shared page setup when `<body data-page>` is present
pub fn bootstrap_page() {
    let Some(shell) = browser_shell() else {
        return;
    };
    let Some(page) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| page_name(&document))
    else {
        return;
    };

    log::info!("[Shell] bootstrapping page {:?}", page);
    wasm_bindgen_futures::spawn_local(async move {
        shell.bootstrap(page).await;
    });
}
