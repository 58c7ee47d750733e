//! The request pipeline: logical descriptor in, classified outcome out.

mod classify;
mod envelope;
mod error;
mod request;
mod stage;

pub use classify::ResponseClassifier;
pub use error::{ApiError, GENERIC_FAILURE, GENERIC_NETWORK_FAILURE};
pub use request::RequestDescriptor;
pub use stage::{AuthStage, RequestStage};

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use crate::flavor::{Flavor, API_BASE_PATH};
use crate::nav::{NavigationDriver, RouteTable, Shell, TracingShell};
use crate::notify::{Notifier, TracingNotifier};
use crate::session::{FileStorage, SessionStore, Storage};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// The authenticated client core shared by both consoles.
///
/// Owns the transport client, the stage list, the session store, the
/// navigation driver and the response classifier; assembled once per
/// application via [`ApiClient::builder`].
pub struct ApiClient {
    http: Client,
    base_url: String,
    default_timeout: Duration,
    stages: Vec<Arc<dyn RequestStage>>,
    classifier: ResponseClassifier,
    session: SessionStore,
    nav: Arc<NavigationDriver>,
    flavor: Flavor,
}

impl ApiClient {
    pub fn builder(origin: impl Into<String>, flavor: Flavor) -> ApiClientBuilder {
        ApiClientBuilder::new(origin.into(), flavor)
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn navigation(&self) -> &NavigationDriver {
        &self.nav
    }

    pub fn classifier(&self) -> &ResponseClassifier {
        &self.classifier
    }

    /// Resolve a descriptor into a transport request and run the stage list.
    pub fn build_request(&self, descriptor: &RequestDescriptor) -> Result<reqwest::Request, ApiError> {
        let url = format!("{}{}", self.base_url, descriptor.path);
        let mut builder = self.http.request(descriptor.method.clone(), &url);
        if !descriptor.query.is_empty() {
            builder = builder.query(&descriptor.query);
        }
        if let Some(body) = &descriptor.body {
            builder = builder.json(body);
        }
        let mut request = builder
            .build()
            .map_err(|err| ApiError::InvalidRequest(err.to_string()))?;
        for stage in &self.stages {
            stage.apply(&mut request)?;
        }
        Ok(request)
    }

    /// Issue a request and settle it into the caller's payload type.
    pub async fn invoke<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<T, ApiError> {
        let value = self.invoke_value(descriptor).await?;
        serde_json::from_value(value).map_err(|source| ApiError::Decode { source })
    }

    /// Issue a request and settle it into the raw resolved payload.
    pub async fn invoke_value(&self, descriptor: RequestDescriptor) -> Result<Value, ApiError> {
        let request_id = Uuid::new_v4();
        let timeout = descriptor.timeout_override.unwrap_or(self.default_timeout);
        let request = self.build_request(&descriptor)?;
        tracing::debug!(
            %request_id,
            method = %descriptor.method,
            path = %descriptor.path,
            "dispatching api request"
        );

        // One deadline bounds the whole exchange, body read included; a
        // server that stalls mid-body must not hang the caller.
        let exchange = async {
            let response = self.http.execute(request).await?;
            let status = response.status();
            if !status.is_success() {
                return Ok((status, None));
            }
            let bytes = response.bytes().await?;
            Ok::<_, reqwest::Error>((status, Some(bytes)))
        };
        let (status, bytes) = match tokio::time::timeout(timeout, exchange).await {
            Err(_) => {
                tracing::warn!(%request_id, timeout_ms = timeout.as_millis() as u64, "request timed out");
                return Err(self.classifier.settle_transport_failure(&format!(
                    "request timed out after {} ms",
                    timeout.as_millis()
                )));
            }
            Ok(Err(err)) => {
                tracing::warn!(%request_id, error = %err, "transport failure");
                return Err(self.classifier.settle_transport_failure(&err.to_string()));
            }
            Ok(Ok(settled)) => settled,
        };

        let Some(bytes) = bytes else {
            tracing::debug!(%request_id, status = status.as_u16(), "api request failed");
            return Err(self.classifier.settle_http_failure(status));
        };
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        let body: Value = match serde_json::from_slice(&bytes) {
            Ok(body) => body,
            Err(source) => return Err(ApiError::Decode { source }),
        };
        self.classifier.settle_success(body)
    }
}

/// Builder for [`ApiClient`].
pub struct ApiClientBuilder {
    origin: String,
    flavor: Flavor,
    storage: Option<Arc<dyn Storage>>,
    notifier: Arc<dyn Notifier>,
    shell: Arc<dyn Shell>,
    routes: RouteTable,
    default_timeout: Duration,
    extra_stages: Vec<Arc<dyn RequestStage>>,
}

impl ApiClientBuilder {
    fn new(origin: String, flavor: Flavor) -> Self {
        Self {
            origin,
            flavor,
            storage: None,
            notifier: Arc::new(TracingNotifier),
            shell: Arc::new(TracingShell),
            routes: RouteTable::default(),
            default_timeout: DEFAULT_TIMEOUT,
            extra_stages: Vec::new(),
        }
    }

    pub fn storage(mut self, storage: Arc<dyn Storage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn shell(mut self, shell: Arc<dyn Shell>) -> Self {
        self.shell = shell;
        self
    }

    pub fn routes(mut self, routes: RouteTable) -> Self {
        self.routes = routes;
        self
    }

    pub fn default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// Append a stage after the built-in auth stage.
    pub fn stage(mut self, stage: Arc<dyn RequestStage>) -> Self {
        self.extra_stages.push(stage);
        self
    }

    /// Assemble the client, reading the persisted credential once.
    pub fn build(self) -> ApiClient {
        let storage = self
            .storage
            .unwrap_or_else(|| Arc::new(FileStorage::new(FileStorage::default_dir())));
        let session = SessionStore::new(self.flavor, storage);
        let restored = session.load();
        tracing::debug!(
            flavor = ?self.flavor,
            restored = restored.is_some(),
            "session bootstrap"
        );

        let nav = Arc::new(NavigationDriver::new(
            self.flavor,
            self.routes,
            session.clone(),
            self.shell,
        ));
        let classifier =
            ResponseClassifier::new(self.flavor, session.clone(), self.notifier, Arc::clone(&nav));

        let mut stages: Vec<Arc<dyn RequestStage>> =
            vec![Arc::new(AuthStage::new(session.clone()))];
        stages.extend(self.extra_stages);

        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .expect("Failed to build http client");

        ApiClient {
            http,
            base_url: format!("{}{}", self.origin.trim_end_matches('/'), API_BASE_PATH),
            default_timeout: self.default_timeout,
            stages,
            classifier,
            session,
            nav,
            flavor: self.flavor,
        }
    }
}
