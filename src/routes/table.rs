use std::collections::HashMap;
use std::sync::OnceLock;

use crate::views::{View, ViewFactory};

/// RouteParams
///
/// Parameters bound from `:name` pattern segments, keyed by segment name.
/// Values are kept as opaque strings; interpretation belongs to the view.
pub type RouteParams = HashMap<String, String>;

/// RouteDef
///
/// A single immutable route descriptor: the path pattern it matches, a stable
/// route name, the access-control flag the navigation guard enforces, and a
/// factory producing the route's view.
///
/// The view is instantiated lazily: the factory runs on the first navigation
/// that reaches the route and the result is cached for the table's lifetime.
pub struct RouteDef {
    path: &'static str,
    name: &'static str,
    requires_auth: bool,
    loader: ViewFactory,
    view: OnceLock<Box<dyn View>>,
}

impl RouteDef {
    /// public
    ///
    /// Declares a route accessible to any visitor. The guard allows
    /// navigations to it without contacting the session backend.
    pub fn public(path: &'static str, name: &'static str, loader: ViewFactory) -> Self {
        Self {
            path,
            name,
            requires_auth: false,
            loader,
            view: OnceLock::new(),
        }
    }

    /// guarded
    ///
    /// Declares a route that requires a live session. Every navigation to it
    /// triggers one session probe before the view is served.
    pub fn guarded(path: &'static str, name: &'static str, loader: ViewFactory) -> Self {
        Self {
            path,
            name,
            requires_auth: true,
            loader,
            view: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn requires_auth(&self) -> bool {
        self.requires_auth
    }

    /// view
    ///
    /// Returns the route's view, running the loader on first access.
    pub fn view(&self) -> &dyn View {
        self.view.get_or_init(|| (self.loader)()).as_ref()
    }
}

/// ResolvedRoute
///
/// The outcome of a successful table lookup: the matched descriptor plus the
/// parameters bound from the request path.
pub struct ResolvedRoute<'a> {
    pub route: &'a RouteDef,
    pub params: RouteParams,
}

/// RouteTable
///
/// The ordered collection of route descriptors. Built once at startup and
/// never mutated afterwards; lookups resolve to the first matching entry.
pub struct RouteTable {
    routes: Vec<RouteDef>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDef>) -> Self {
        Self { routes }
    }

    /// resolve
    ///
    /// Resolves a request path to exactly one route, or none. Entries are
    /// tried in declaration order and the first match wins, so literal routes
    /// shadow parameterized ones declared after them.
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute<'_>> {
        self.routes.iter().find_map(|route| {
            match_path(route.path, path).map(|params| ResolvedRoute { route, params })
        })
    }
}

/// match_path
///
/// Matches a request path against a pattern, segment by segment. A `:name`
/// pattern segment matches any single non-empty path segment and binds it; a
/// literal segment must compare equal. Matching is exact on segment count.
///
/// Empty segments are dropped on both sides, which makes `/events/` and
/// `/events` equivalent.
fn match_path(pattern: &str, path: &str) -> Option<RouteParams> {
    let pattern_segments: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = RouteParams::new();
    for (pattern_segment, path_segment) in pattern_segments.iter().zip(&path_segments) {
        if let Some(name) = pattern_segment.strip_prefix(':') {
            params.insert(name.to_string(), (*path_segment).to_string());
        } else if pattern_segment != path_segment {
            return None;
        }
    }

    Some(params)
}
