//! Merchant directory endpoints (operator console).

use serde_json::Value;

use crate::client::{ApiClient, ApiError, RequestDescriptor};

pub struct MerchantApi<'a> {
    client: &'a ApiClient,
}

impl<'a> MerchantApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Value, ApiError> {
        self.client
            .invoke_value(RequestDescriptor::get("/merchants"))
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .invoke_value(RequestDescriptor::get(format!("/merchants/{}", id)))
            .await
    }
}
