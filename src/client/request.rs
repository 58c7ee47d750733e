//! Logical request descriptors.

use std::time::Duration;

use reqwest::Method;
use serde_json::Value;

/// A logical request before it is resolved against the base URL and
/// decorated by the stage list.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub path: String,
    pub method: Method,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub timeout_override: Option<Duration>,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            query: Vec::new(),
            body: None,
            timeout_override: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Override the pipeline's default timeout for this request only.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout_override = Some(timeout);
        self
    }
}
