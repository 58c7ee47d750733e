//! The authenticated identity and its persisted representation.

use serde_json::Value;

use crate::flavor::Flavor;

/// Authenticated identity held by the session store.
///
/// Exactly one credential is live per application instance and its variant
/// always matches the application flavor; persisted data of the wrong shape
/// decodes as absent.
#[derive(Clone, PartialEq)]
pub enum Credential {
    /// Admin session: an opaque bearer token.
    Admin { token: String },
    /// Merchant session: the merchant id plus the profile object the login
    /// endpoint returned.
    Merchant { merchant_id: String, profile: Value },
}

impl Credential {
    pub fn admin(token: impl Into<String>) -> Self {
        Credential::Admin {
            token: token.into(),
        }
    }

    /// Build a merchant credential from a login profile object.
    ///
    /// Returns `None` when the profile carries no usable `merchantId` field.
    pub fn merchant(profile: Value) -> Option<Self> {
        let merchant_id = match profile.get("merchantId") {
            Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
            Some(Value::Number(n)) => n.to_string(),
            _ => return None,
        };
        Some(Credential::Merchant {
            merchant_id,
            profile,
        })
    }

    /// The flavor this credential belongs to.
    pub fn flavor(&self) -> Flavor {
        match self {
            Credential::Admin { .. } => Flavor::Admin,
            Credential::Merchant { .. } => Flavor::Merchant,
        }
    }

    /// Decode a persisted credential.
    ///
    /// Admin sessions persist the raw token string; merchant sessions persist
    /// the profile as JSON. Anything malformed decodes as `None` rather than
    /// an error.
    pub fn decode(flavor: Flavor, raw: &str) -> Option<Self> {
        match flavor {
            Flavor::Admin => {
                let token = raw.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(Credential::admin(token))
                }
            }
            Flavor::Merchant => {
                let profile: Value = serde_json::from_str(raw).ok()?;
                Credential::merchant(profile)
            }
        }
    }

    /// Encode for persistence under the flavor's storage key.
    pub fn encode(&self) -> String {
        match self {
            Credential::Admin { token } => token.clone(),
            Credential::Merchant { profile, .. } => profile.to_string(),
        }
    }

    /// Extract the credential from a login response payload.
    ///
    /// The admin login resolves to an object carrying a `token` field; the
    /// merchant login resolves to the merchant profile itself.
    pub fn from_login_payload(flavor: Flavor, payload: &Value) -> Option<Self> {
        match flavor {
            Flavor::Admin => {
                let token = payload.get("token")?.as_str()?.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(Credential::admin(token))
                }
            }
            Flavor::Merchant => Credential::merchant(payload.clone()),
        }
    }
}

// Manual Debug so a logged credential never leaks the token.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credential::Admin { .. } => f.debug_struct("Admin").field("token", &"••••••••").finish(),
            Credential::Merchant { merchant_id, .. } => f
                .debug_struct("Merchant")
                .field("merchant_id", merchant_id)
                .finish_non_exhaustive(),
        }
    }
}
