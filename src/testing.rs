//! Test Doubles
//!
//! In-memory stand-ins for the browser capabilities.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use futures::future::LocalBoxFuture;

use crate::commands::{ApiError, ApiResult, BackendApi};
use crate::models::{ApiEnvelope, DashboardData};
use crate::report::Reporter;
use crate::session::{KeyValueStore, MemoryStore};
use crate::surface::{ClickHandler, Navigator, Slot, Surface};

// ========================
// Surface
// ========================

#[derive(Default)]
struct ElementState {
    text: Option<String>,
    html: Option<String>,
    click: Vec<Rc<ClickHandler>>,
}

struct FakeSlot(Rc<RefCell<ElementState>>);

impl Slot for FakeSlot {
    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = Some(text.to_string());
    }

    fn set_html(&self, html: &str) {
        self.0.borrow_mut().html = Some(html.to_string());
    }

    fn on_click(&self, handler: ClickHandler) {
        self.0.borrow_mut().click.push(Rc::new(handler));
    }
}

/// Page with a fixed set of element ids
#[derive(Default)]
pub struct FakeSurface {
    elements: HashMap<String, Rc<RefCell<ElementState>>>,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elements(ids: &[&str]) -> Self {
        let elements = ids
            .iter()
            .map(|id| (id.to_string(), Rc::new(RefCell::new(ElementState::default()))))
            .collect();
        Self { elements }
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.elements.get(id)?.borrow().text.clone()
    }

    pub fn html(&self, id: &str) -> Option<String> {
        self.elements.get(id)?.borrow().html.clone()
    }

    pub fn click_handlers(&self, id: &str) -> usize {
        self.elements.get(id).map_or(0, |e| e.borrow().click.len())
    }

    /// Futures of every handler bound to `id`, as a click would start them
    pub fn click(&self, id: &str) -> Vec<LocalBoxFuture<'static, ()>> {
        let handlers = match self.elements.get(id) {
            Some(element) => element.borrow().click.clone(),
            None => Vec::new(),
        };
        handlers.iter().map(|handler| handler()).collect()
    }
}

impl Surface for FakeSurface {
    fn slot(&self, id: &str) -> Option<Box<dyn Slot>> {
        self.elements
            .get(id)
            .map(|state| Box::new(FakeSlot(state.clone())) as Box<dyn Slot>)
    }
}

// ========================
// Navigation / reporting
// ========================

#[derive(Default)]
pub struct RecordingNavigator {
    pub visits: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, url: &str) {
        self.visits.borrow_mut().push(url.to_string());
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    pub reports: RefCell<Vec<(String, String)>>,
}

impl RecordingReporter {
    pub fn scopes(&self) -> Vec<String> {
        self.reports.borrow().iter().map(|(scope, _)| scope.clone()).collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, scope: &str, message: &str) {
        self.reports.borrow_mut().push((scope.to_string(), message.to_string()));
    }
}

// ========================
// Backend
// ========================

/// Scripted backend; `store` lets a test look at session state at the
/// moment the logout request is made.
pub struct FakeApi {
    pub logout_result: ApiResult<()>,
    pub dashboard_result: ApiResult<ApiEnvelope<DashboardData>>,
    pub logout_calls: Cell<usize>,
    pub dashboard_calls: Cell<usize>,
    pub store: Option<Rc<MemoryStore>>,
    pub session_seen_at_logout: Cell<Option<bool>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            logout_result: Ok(()),
            dashboard_result: Err(ApiError::Network("not scripted".to_string())),
            logout_calls: Cell::new(0),
            dashboard_calls: Cell::new(0),
            store: None,
            session_seen_at_logout: Cell::new(None),
        }
    }
}

impl FakeApi {
    pub fn with_dashboard_json(json: &str) -> Self {
        Self {
            dashboard_result: serde_json::from_str(json)
                .map_err(|e| ApiError::Decode(e.to_string())),
            ..Self::default()
        }
    }
}

#[async_trait(?Send)]
impl BackendApi for FakeApi {
    async fn logout(&self) -> ApiResult<()> {
        self.logout_calls.set(self.logout_calls.get() + 1);
        if let Some(store) = &self.store {
            self.session_seen_at_logout.set(Some(store.get("user").is_some()));
        }
        self.logout_result.clone()
    }

    async fn dashboard(&self) -> ApiResult<ApiEnvelope<DashboardData>> {
        self.dashboard_calls.set(self.dashboard_calls.get() + 1);
        self.dashboard_result.clone()
    }
}
