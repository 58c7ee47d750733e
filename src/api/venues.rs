//! Venue management endpoints.

use serde_json::Value;

use crate::client::{ApiClient, ApiError, RequestDescriptor};

pub struct VenueApi<'a> {
    client: &'a ApiClient,
}

impl<'a> VenueApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Paged venue listing (operator console).
    pub async fn list(&self, params: &[(&str, String)]) -> Result<Value, ApiError> {
        let mut descriptor = RequestDescriptor::get("/venues");
        for (key, value) in params {
            descriptor = descriptor.query(*key, value);
        }
        self.client.invoke_value(descriptor).await
    }

    pub async fn get(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .invoke_value(RequestDescriptor::get(format!("/venues/{}", id)))
            .await
    }

    pub async fn create(&self, venue: Value) -> Result<Value, ApiError> {
        self.client
            .invoke_value(RequestDescriptor::post("/venues").json(venue))
            .await
    }

    pub async fn update(&self, id: i64, venue: Value) -> Result<Value, ApiError> {
        self.client
            .invoke_value(RequestDescriptor::put(format!("/venues/{}", id)).json(venue))
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .invoke_value(RequestDescriptor::delete(format!("/venues/{}", id)))
            .await
    }

    /// Venues of a specific merchant (operator console).
    pub async fn for_merchant(&self, merchant_id: i64) -> Result<Value, ApiError> {
        self.client
            .invoke_value(RequestDescriptor::get(format!("/venues/merchant/{}", merchant_id)))
            .await
    }

    /// The authenticated merchant's own venues (merchant console).
    pub async fn mine(&self, params: &[(&str, String)]) -> Result<Value, ApiError> {
        let mut descriptor = RequestDescriptor::get("/venues/merchant");
        for (key, value) in params {
            descriptor = descriptor.query(*key, value);
        }
        self.client.invoke_value(descriptor).await
    }

    pub async fn set_status(&self, id: i64, status: &str) -> Result<Value, ApiError> {
        self.client
            .invoke_value(
                RequestDescriptor::put(format!("/venues/{}/status", id)).query("status", status),
            )
            .await
    }

    pub async fn set_occupancy(&self, id: i64, occupancy: u32) -> Result<Value, ApiError> {
        self.client
            .invoke_value(
                RequestDescriptor::put(format!("/venues/{}/occupancy", id))
                    .query("occupancy", occupancy),
            )
            .await
    }

    pub async fn set_rating(&self, id: i64, rating: f64) -> Result<Value, ApiError> {
        self.client
            .invoke_value(
                RequestDescriptor::put(format!("/venues/{}/rating", id)).query("rating", rating),
            )
            .await
    }

    pub async fn types(&self) -> Result<Value, ApiError> {
        self.client
            .invoke_value(RequestDescriptor::get("/venues/types"))
            .await
    }

    pub async fn statuses(&self) -> Result<Value, ApiError> {
        self.client
            .invoke_value(RequestDescriptor::get("/venues/statuses"))
            .await
    }

    /// Aggregate statistics for the authenticated merchant's venues.
    pub async fn merchant_stats(&self) -> Result<Value, ApiError> {
        self.client
            .invoke_value(RequestDescriptor::get("/venues/merchant/stats"))
            .await
    }
}
