//! Navigation authorization: route metadata, the pure guard decision, and
//! the driver that applies decisions to the hosting shell.

mod driver;
mod guard;
mod route;

pub use driver::{NavigationDriver, Shell, TracingShell};
pub use guard::{decide, Decision};
pub use route::{Route, RouteMeta, RouteTable};
