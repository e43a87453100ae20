//! Failure Reporting
//!
//! Background failures (logout request, dashboard fetch, bad session) are
//! never shown to the user. They go to an injected `Reporter`.

/// Sink for failures that must not interrupt the page
pub trait Reporter {
    /// `scope` is a short component tag such as `"Logout"`
    fn report(&self, scope: &str, message: &str);
}

/// Forwards reports to the `log` facade (console via `wasm-logger`)
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, scope: &str, message: &str) {
        log::error!("[{}] {}", scope, message);
    }
}
