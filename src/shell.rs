//! Page Shell
//!
//! The parts every store page shares: session gate, role menu, header,
//! logout button and the home page dashboard.

use std::rc::Rc;

use futures::FutureExt;

use crate::commands::BackendApi;
use crate::config::ShellConfig;
use crate::dashboard::{render_dashboard, DashboardOutcome};
use crate::menu::{menu_entries, render_menu};
use crate::models::{Role, User};
use crate::report::Reporter;
use crate::session::{KeyValueStore, SessionError, SessionRepository};
use crate::surface::{Navigator, Surface};

/// Page controller with its capabilities injected.
///
/// Cheap to clone; click handlers hold their own copy.
#[derive(Clone)]
pub struct PageShell {
    config: Rc<ShellConfig>,
    sessions: SessionRepository,
    surface: Rc<dyn Surface>,
    api: Rc<dyn BackendApi>,
    navigator: Rc<dyn Navigator>,
    reporter: Rc<dyn Reporter>,
}

impl PageShell {
    pub fn new(
        config: ShellConfig,
        store: Rc<dyn KeyValueStore>,
        surface: Rc<dyn Surface>,
        api: Rc<dyn BackendApi>,
        navigator: Rc<dyn Navigator>,
        reporter: Rc<dyn Reporter>,
    ) -> Self {
        let sessions = SessionRepository::new(store, config.storage.clone());
        Self {
            config: Rc::new(config),
            sessions,
            surface,
            api,
            navigator,
            reporter,
        }
    }

    /// Return the logged-in user, or send the browser to the login page.
    ///
    /// An unreadable session is also wiped so the next visit starts clean.
    pub fn check_login(&self) -> Option<User> {
        match self.sessions.load() {
            Ok(user) => Some(user),
            Err(SessionError::NotLoggedIn) => {
                log::info!("[Session] no session, redirecting to {}", self.config.login_url);
                self.navigator.redirect(&self.config.login_url);
                None
            }
            Err(err @ SessionError::Corrupt(_)) => {
                self.reporter.report("Session", &err.to_string());
                self.sessions.clear();
                self.navigator.redirect(&self.config.login_url);
                None
            }
        }
    }

    /// Fill `menuList` with the menu for `role`, highlighting `current_page`
    pub fn generate_menu(&self, role: &Role, current_page: &str) {
        let Some(list) = self.surface.slot(&self.config.elements.menu_list) else {
            return;
        };
        match render_menu(&menu_entries(role, current_page)) {
            Ok(html) => list.set_html(&html),
            Err(e) => self.reporter.report("Menu", &e.to_string()),
        }
    }

    /// Session gate, header, menu and logout button. Returns the user when
    /// the page may be shown.
    pub fn init_common_page(&self, current_page: &str) -> Option<User> {
        let user = self.check_login()?;

        self.surface
            .set_text(&self.config.elements.user_info, &user.display_name());
        self.generate_menu(&user.role, current_page);

        if let Some(button) = self.surface.slot(&self.config.elements.logout_button) {
            let shell = self.clone();
            button.on_click(Box::new(move || {
                let shell = shell.clone();
                async move { shell.logout().await }.boxed_local()
            }));
        }

        Some(user)
    }

    /// Tell the backend, then drop the local session and go to the login
    /// page. Local cleanup happens whatever the request outcome.
    pub async fn logout(&self) {
        if let Err(e) = self.api.logout().await {
            self.reporter.report("Logout", &e.to_string());
        }

        self.sessions.clear();
        self.navigator.redirect(&self.config.login_url);
    }

    /// Fetch the dashboard snapshot and write its figures. Failures leave
    /// the page as it was.
    pub async fn load_dashboard_data(&self) -> DashboardOutcome {
        let envelope = match self.api.dashboard().await {
            Ok(envelope) => envelope,
            Err(e) => {
                self.reporter.report("Dashboard", &e.to_string());
                return DashboardOutcome::Failed;
            }
        };

        if !envelope.success {
            let message = envelope.message.as_deref().unwrap_or("request rejected");
            self.reporter.report("Dashboard", message);
            return DashboardOutcome::Rejected;
        }
        let Some(data) = envelope.data else {
            self.reporter.report("Dashboard", "response has no data");
            return DashboardOutcome::Rejected;
        };

        let written = render_dashboard(self.surface.as_ref(), &self.config.elements, &data);
        log::debug!("[Dashboard] updated {} figures", written.len());
        DashboardOutcome::Rendered { written }
    }

    /// Start-up for pages that declare themselves with `data-page`: run the
    /// common setup and, on the home page, load the dashboard.
    pub async fn bootstrap(self, current_page: String) -> Option<DashboardOutcome> {
        self.init_common_page(&current_page)?;
        if !self.surface.has(&self.config.elements.today_sales) {
            return None;
        }
        Some(self.load_dashboard_data().await)
    }
}
