//! Store Shell
//!
//! Shared page logic for the convenience-store POS pages: session gate,
//! role menu, logout and the home page dashboard. Compiled to wasm and
//! loaded by every server-rendered page.

pub mod bindings;
pub mod browser;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod format;
pub mod menu;
pub mod models;
pub mod report;
pub mod session;
pub mod shell;
pub mod surface;

#[cfg(test)]
mod testing;

use wasm_bindgen::prelude::*;

pub use shell::PageShell;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    bindings::bootstrap_page();
}
