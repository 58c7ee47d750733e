//! Ordered request stages around the core dispatch.

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Request;

use crate::flavor;
use crate::session::SessionStore;

use super::error::ApiError;

/// One element of the request middleware list.
///
/// Stages run in order over the built transport request; a stage may
/// transform it or short-circuit the dispatch by returning a classified
/// error. New stages (e.g. logging) slot in without touching existing ones.
pub trait RequestStage: Send + Sync {
    fn apply(&self, request: &mut Request) -> Result<(), ApiError>;
}

/// Built-in stage: attach the flavor-specific credential header.
///
/// Reads the session store's in-memory credential. An absent credential
/// sends the request unauthenticated; rejecting it is the backend's job.
pub struct AuthStage {
    session: SessionStore,
}

impl AuthStage {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }
}

impl RequestStage for AuthStage {
    fn apply(&self, request: &mut Request) -> Result<(), ApiError> {
        let Some(credential) = self.session.current() else {
            return Ok(());
        };
        let (name, value) = flavor::auth_header(&credential);
        let value = HeaderValue::from_str(&value)
            .map_err(|err| ApiError::InvalidRequest(format!("credential not header-safe: {}", err)))?;
        request.headers_mut().insert(HeaderName::from_static(name), value);
        Ok(())
    }
}
