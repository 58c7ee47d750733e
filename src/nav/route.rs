//! Static route metadata and path matching.

/// Metadata attached statically to each route, read-only at navigation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMeta {
    /// Page title applied when a transition to this route is allowed.
    pub title: String,
    /// Whether the route requires an authenticated session.
    pub requires_auth: bool,
}

/// One route-table entry: a path pattern plus its metadata.
///
/// Pattern segments starting with `:` match any single non-empty concrete
/// segment, so `/venue/detail/:id` matches `/venue/detail/42`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub meta: RouteMeta,
}

impl Route {
    pub fn new(path: impl Into<String>, title: impl Into<String>, requires_auth: bool) -> Self {
        Self {
            path: path.into(),
            meta: RouteMeta {
                title: title.into(),
                requires_auth,
            },
        }
    }

    /// Whether this entry matches a concrete path.
    pub fn matches(&self, path: &str) -> bool {
        let mut pattern = self.path.split('/');
        let mut concrete = path.split('/');
        loop {
            match (pattern.next(), concrete.next()) {
                (None, None) => return true,
                (Some(expected), Some(segment)) => {
                    if expected.starts_with(':') {
                        if segment.is_empty() {
                            return false;
                        }
                    } else if expected != segment {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }
}

/// Ordered collection of routes; first match wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.matches(path))
    }
}
