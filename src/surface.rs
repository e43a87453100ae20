//! Page Surface
//!
//! Capability-checked access to the host page. Elements are looked up by
//! id and may be missing; every write goes through `Option<&dyn Slot>` and
//! does nothing when the element is absent.

use futures::future::LocalBoxFuture;

/// Async work triggered by a click
pub type ClickHandler = Box<dyn Fn() -> LocalBoxFuture<'static, ()>>;

/// A page element that can receive content
pub trait Slot {
    fn set_text(&self, text: &str);
    fn set_html(&self, html: &str);
    /// Run `handler` on every click; the host spawns the returned future
    fn on_click(&self, handler: ClickHandler);
}

/// The host page
pub trait Surface {
    fn slot(&self, id: &str) -> Option<Box<dyn Slot>>;

    fn has(&self, id: &str) -> bool {
        self.slot(id).is_some()
    }

    /// Set text content of `id`; returns whether the element exists
    fn set_text(&self, id: &str, text: &str) -> bool {
        write_text(self.slot(id).as_deref(), text)
    }

    /// Replace inner markup of `id`; returns whether the element exists
    fn set_html(&self, id: &str, html: &str) -> bool {
        write_html(self.slot(id).as_deref(), html)
    }
}

/// Page navigation (`window.location` in the browser)
pub trait Navigator {
    fn redirect(&self, url: &str);
}

pub fn write_text(slot: Option<&dyn Slot>, text: &str) -> bool {
    match slot {
        Some(slot) => {
            slot.set_text(text);
            true
        }
        None => false,
    }
}

pub fn write_html(slot: Option<&dyn Slot>, html: &str) -> bool {
    match slot {
        Some(slot) => {
            slot.set_html(html);
            true
        }
        None => false,
    }
}
