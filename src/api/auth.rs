//! Session endpoints: login, logout, identity.

use serde::Serialize;
use serde_json::Value;

use crate::client::{ApiClient, ApiError, RequestDescriptor};
use crate::flavor::Flavor;
use crate::session::Credential;

/// Login form payload.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    fn login_endpoint(&self) -> &'static str {
        match self.client.flavor() {
            Flavor::Admin => "/auth/login",
            Flavor::Merchant => "/auth/merchant/login",
        }
    }

    fn logout_endpoint(&self) -> &'static str {
        match self.client.flavor() {
            Flavor::Admin => "/auth/logout",
            Flavor::Merchant => "/auth/merchant/logout",
        }
    }

    /// Log in and install the returned credential in the session store.
    ///
    /// The resolved payload is returned as-is so the caller can render
    /// profile details; a payload without a usable credential is logged and
    /// leaves the session unchanged.
    pub async fn login(&self, form: &LoginRequest) -> Result<Value, ApiError> {
        let payload = self
            .client
            .invoke_value(
                RequestDescriptor::post(self.login_endpoint()).json(serde_json::json!({
                    "username": form.username,
                    "password": form.password,
                })),
            )
            .await?;
        match Credential::from_login_payload(self.client.flavor(), &payload) {
            Some(credential) => self.client.session().save(credential),
            None => tracing::warn!("login succeeded but payload carried no credential"),
        }
        Ok(payload)
    }

    /// Log out: best-effort server call, then clear the local session.
    ///
    /// The session is cleared even when the server call fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self
            .client
            .invoke_value(RequestDescriptor::post(self.logout_endpoint()))
            .await;
        self.client.session().clear();
        result.map(|_| ())
    }

    /// Current merchant identity as the backend sees it.
    pub async fn merchant_info(&self) -> Result<Value, ApiError> {
        self.client
            .invoke_value(RequestDescriptor::get("/auth/merchant/info"))
            .await
    }
}
