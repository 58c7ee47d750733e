//! Applies guard decisions to the hosting shell.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::flavor::Flavor;
use crate::session::SessionStore;

use super::guard::{self, Decision};
use super::route::RouteTable;

/// Redirect chains longer than this are dropped; a route table that
/// redirects in a cycle would otherwise loop forever.
const MAX_REDIRECTS: u8 = 8;

/// Shell-facing navigation effects.
///
/// `push` must perform the transition without re-entering the driver: the
/// driver owns guard evaluation for every path it pushes.
pub trait Shell: Send + Sync {
    fn push(&self, path: &str);
    fn set_title(&self, title: &str);
}

/// Default shell: records transitions in the `tracing` log only.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingShell;

impl Shell for TracingShell {
    fn push(&self, path: &str) {
        tracing::info!(path, "navigation push");
    }

    fn set_title(&self, title: &str) {
        tracing::debug!(title, "page title");
    }
}

/// Drives the navigation guard for the lifetime of the application.
///
/// Tracks the current path so repeated redirects to the same target — for
/// example several requests expiring at once — collapse into a single
/// transition.
pub struct NavigationDriver {
    flavor: Flavor,
    routes: RouteTable,
    session: SessionStore,
    shell: Arc<dyn Shell>,
    current: Mutex<String>,
}

impl NavigationDriver {
    pub fn new(
        flavor: Flavor,
        routes: RouteTable,
        session: SessionStore,
        shell: Arc<dyn Shell>,
    ) -> Self {
        Self {
            flavor,
            routes,
            session,
            shell,
            current: Mutex::new("/".to_string()),
        }
    }

    pub fn current_path(&self) -> String {
        self.current.lock().clone()
    }

    /// Evaluate the guard for a transition to `target` and apply the outcome.
    ///
    /// Returns the decision for the original target. On `Allow` the driver
    /// records the path and sets the page title; the shell completes its own
    /// transition. On `RedirectTo` the driver pushes the redirect (debounced)
    /// and re-evaluates the guard for the redirect target.
    pub fn navigate(&self, target: &str) -> Decision {
        let mut current = self.current.lock();
        self.apply(&mut current, target, 0)
    }

    fn apply(&self, current: &mut String, target: &str, depth: u8) -> Decision {
        let Some(route) = self.routes.resolve(target).cloned() else {
            // Unknown paths pass through untitled; the shell's fallback view
            // owns them.
            *current = target.to_string();
            return Decision::Allow;
        };
        match guard::decide(&route, current, self.session.is_present(), self.flavor) {
            Decision::Allow => {
                *current = target.to_string();
                self.shell.set_title(&route.meta.title);
                Decision::Allow
            }
            Decision::RedirectTo(to) => {
                if *current == to {
                    tracing::debug!(%to, "redirect target already current, skipping");
                    return Decision::RedirectTo(to);
                }
                if depth >= MAX_REDIRECTS {
                    tracing::warn!(%to, "redirect chain too long, aborting");
                    return Decision::RedirectTo(to);
                }
                self.shell.push(&to);
                let _ = self.apply(current, &to, depth + 1);
                Decision::RedirectTo(to)
            }
        }
    }

    /// Forced redirect to the login screen after an authorization failure.
    ///
    /// Debounced: a no-op when the login screen is already current, so any
    /// number of concurrent expiries produce at most one transition.
    pub fn force_login(&self) {
        let login = self.flavor.login_path();
        let mut current = self.current.lock();
        if *current == login {
            tracing::debug!("already on login screen, skipping forced redirect");
            return;
        }
        self.shell.push(login);
        let _ = self.apply(&mut current, login, 1);
    }
}
