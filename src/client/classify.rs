//! Reconciles envelope and HTTP/transport outcomes into one result type.
//!
//! This is the only place in the system with cross-cutting side effects: it
//! emits the user-visible notification for every classified failure, and for
//! an authorization failure it clears the session and forces the login
//! screen. Side effects and propagation are not exclusive — the classifier
//! always returns the error afterwards so callers can run local recovery.

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::Value;

use crate::flavor::Flavor;
use crate::nav::NavigationDriver;
use crate::notify::Notifier;
use crate::session::SessionStore;

use super::envelope;
use super::error::ApiError;

/// Settles every request outcome exactly once.
pub struct ResponseClassifier {
    flavor: Flavor,
    session: SessionStore,
    notifier: Arc<dyn Notifier>,
    nav: Arc<NavigationDriver>,
}

impl ResponseClassifier {
    pub fn new(
        flavor: Flavor,
        session: SessionStore,
        notifier: Arc<dyn Notifier>,
        nav: Arc<NavigationDriver>,
    ) -> Self {
        Self {
            flavor,
            session,
            notifier,
            nav,
        }
    }

    /// Settle a 2xx exchange: unwrap the envelope, or surface the
    /// application error with its one notification.
    ///
    /// An envelope code of 401 stays an application error here — only a raw
    /// HTTP 401 status triggers the forced logout.
    pub fn settle_success(&self, body: Value) -> Result<Value, ApiError> {
        match envelope::unwrap(body) {
            Ok(data) => Ok(data),
            Err(err) => {
                self.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }

    /// Settle a non-2xx exchange.
    ///
    /// With the status table enabled each tabled status gets its prescribed
    /// notification, and 401 additionally clears the session and forces the
    /// login screen. With the table disabled (merchant flavor) every status
    /// takes the generic path: one generic notification, no recovery.
    pub fn settle_http_failure(&self, status: StatusCode) -> ApiError {
        let err = ApiError::from_status(status);
        if !self.flavor.status_table_enabled() {
            self.notifier
                .error(&format!("request failed with status {}", status.as_u16()));
            return err;
        }
        self.notifier.error(&err.to_string());
        if err.is_unauthorized() {
            let cleared = self.session.clear();
            tracing::info!(cleared, "session expired, forcing login");
            self.nav.force_login();
        }
        err
    }

    /// Settle a transport-level failure (no HTTP response received).
    pub fn settle_transport_failure(&self, message: &str) -> ApiError {
        let err = ApiError::network(message);
        self.notifier.error(&err.to_string());
        err
    }
}
