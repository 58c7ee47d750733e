//! Shared client core for the sport-venue operator and merchant consoles.
//!
//! Covers the authenticated request pipeline, the response classifier with
//! its notification and forced-logout side effects, the persisted session
//! store, and the navigation-authorization guard. Per-resource endpoint
//! wrappers live in [`api`] and only build descriptors for the pipeline.
//!
//! The two console flavors share all of this code; everything that differs
//! between them is data on [`flavor::Flavor`].

pub mod api;
pub mod client;
pub mod flavor;
pub mod nav;
pub mod notify;
pub mod session;

pub use client::{ApiClient, ApiClientBuilder, ApiError, RequestDescriptor, DEFAULT_TIMEOUT};
pub use flavor::Flavor;
pub use nav::{Decision, NavigationDriver, Route, RouteMeta, RouteTable, Shell};
pub use notify::Notifier;
pub use session::{Credential, SessionStore};
