//! Application flavor profiles.
//!
//! The operator/admin and merchant consoles share one client core; everything
//! that differs between them lives here as data: the credential header shape,
//! whether the HTTP status handler table is enabled, the reserved navigation
//! paths, and the storage key the credential persists under.

use crate::session::Credential;

/// Path prefix all core requests are issued under.
pub const API_BASE_PATH: &str = "/api";

/// Application variant the client core is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Operator console: bearer-token credential, full status handling.
    Admin,
    /// Merchant console: merchant-identity credential, generic failure UX.
    Merchant,
}

impl Flavor {
    /// Storage key the credential is persisted under.
    pub fn storage_key(self) -> &'static str {
        match self {
            Flavor::Admin => "token",
            Flavor::Merchant => "merchantInfo",
        }
    }

    /// Reserved login screen path.
    pub fn login_path(self) -> &'static str {
        "/login"
    }

    /// Path an authenticated session is sent to when it hits the login screen.
    pub fn home_path(self) -> &'static str {
        match self {
            Flavor::Admin => "/venue/list",
            Flavor::Merchant => "/dashboard",
        }
    }

    /// Whether the per-status (401/403/404/500) handler table is enabled.
    ///
    /// The merchant console ships without it: every HTTP failure there takes
    /// the generic notification path and never forces a logout.
    pub fn status_table_enabled(self) -> bool {
        matches!(self, Flavor::Admin)
    }
}

/// Header name and value for authentication.
///
/// Names are lowercase so they can back a static `HeaderName`.
pub type AuthHeader = (&'static str, String);

/// Build the authentication header for a credential.
///
/// The header shape follows the credential variant, which the session store
/// guarantees matches the application flavor: a bearer token for admin
/// sessions, the merchant-identity header for merchant sessions.
pub fn auth_header(credential: &Credential) -> AuthHeader {
    match credential {
        Credential::Admin { token } => ("authorization", format!("Bearer {}", token)),
        Credential::Merchant { merchant_id, .. } => ("x-merchant-id", merchant_id.clone()),
    }
}
