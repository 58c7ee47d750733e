//! The navigation-authorization decision.

use crate::flavor::Flavor;

use super::route::Route;

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Let the transition proceed.
    Allow,
    /// Abort the transition and navigate to the given path instead.
    RedirectTo(String),
}

/// Decide whether a transition to `target` may proceed.
///
/// Pure and re-evaluated fresh on every attempted transition against the
/// session store's current value. `current` is the path the application is
/// on; the rules below do not consult it, but the driver supplies it for
/// tracing and for future rules.
///
/// Rules, in order:
/// 1. the target requires auth and no session is present: redirect to login;
/// 2. the target is the login screen and a session is present: redirect home;
/// 3. otherwise allow.
pub fn decide(target: &Route, current: &str, session_present: bool, flavor: Flavor) -> Decision {
    tracing::trace!(
        from = current,
        to = %target.path,
        session_present,
        "evaluating navigation guard"
    );
    if target.meta.requires_auth && !session_present {
        return Decision::RedirectTo(flavor.login_path().to_string());
    }
    if target.path == flavor.login_path() && session_present {
        return Decision::RedirectTo(flavor.home_path().to_string());
    }
    Decision::Allow
}
