//! Per-resource API surface: thin pass-through callers of the core invoke
//! capability. Each function only builds a request descriptor and hands it
//! to the pipeline; payloads resolve as raw JSON for the caller to shape.

mod auth;
mod merchants;
mod venues;

pub use auth::{AuthApi, LoginRequest};
pub use merchants::MerchantApi;
pub use venues::VenueApi;
