//! Browser Adapters
//!
//! `web-sys` implementations of the shell's capabilities.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Storage, Window};

use crate::commands::HttpBackend;
use crate::config::{ShellConfig, CONFIG_ELEMENT_ID};
use crate::report::LogReporter;
use crate::session::KeyValueStore;
use crate::shell::PageShell;
use crate::surface::{ClickHandler, Navigator, Slot, Surface};

/// `window.localStorage`
pub struct BrowserStorage(Storage);

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.0.remove_item(key) {
            log::warn!("[Storage] could not remove {}: {:?}", key, e);
        }
    }
}

/// Elements of the current document, looked up by id on every access
pub struct DocumentSurface(Document);

impl Surface for DocumentSurface {
    fn slot(&self, id: &str) -> Option<Box<dyn Slot>> {
        self.0
            .get_element_by_id(id)
            .map(|element| Box::new(ElementSlot(element)) as Box<dyn Slot>)
    }
}

pub struct ElementSlot(pub Element);

impl Slot for ElementSlot {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn on_click(&self, handler: ClickHandler) {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            wasm_bindgen_futures::spawn_local(handler());
        });
        if let Err(e) = self
            .0
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            log::warn!("[Shell] could not bind click on #{}: {:?}", self.0.id(), e);
        }
        // The listener lives as long as the page
        closure.forget();
    }
}

/// `window.location`
pub struct LocationNavigator(Window);

impl Navigator for LocationNavigator {
    fn redirect(&self, url: &str) {
        if let Err(e) = self.0.location().set_href(url) {
            log::error!("[Shell] navigation to {} failed: {:?}", url, e);
        }
    }
}

/// Shell configuration from the page's JSON block, or the defaults
pub fn page_config(document: &Document) -> ShellConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return ShellConfig::default();
    };
    ShellConfig::from_json(&json).unwrap_or_else(|e| {
        log::warn!("[Shell] ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
        ShellConfig::default()
    })
}

/// `data-page` of `<body>`, if the page declares one
pub fn page_name(document: &Document) -> Option<String> {
    document.body()?.get_attribute("data-page")
}

/// Shell wired to the current window
pub fn browser_shell() -> Option<PageShell> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let storage = match window.local_storage() {
        Ok(Some(storage)) => storage,
        _ => {
            log::error!("[Shell] localStorage is not available");
            return None;
        }
    };

    let config = page_config(&document);
    let api = HttpBackend::new(&config);
    Some(PageShell::new(
        config,
        Rc::new(BrowserStorage(storage)),
        Rc::new(DocumentSurface(document)),
        Rc::new(api),
        Rc::new(LocationNavigator(window)),
        Rc::new(LogReporter),
    ))
}
