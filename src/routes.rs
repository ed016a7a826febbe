//! Static route table and the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` declares every entry of [`ROUTES`] as a Leptos `ProtectedRoute`
//! whose condition is [`guard`] for that entry's path, so the
//! `requires_auth` flag is the only place a route's protection is decided.
//! Public routes simply always pass. The guard is a pure function of the
//! target path and the authenticated flag and is re-evaluated on every
//! navigation.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const LOGIN_PATH: &str = "/";
pub const REGISTER_PATH: &str = "/registrar";
pub const MAINTENANCE_PATH: &str = "/manutencao";
pub const HISTORY_PATH: &str = "/historico";

/// One entry of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub requires_auth: bool,
}

impl RouteDescriptor {
    /// Path without its leading `/`, as a router segment.
    pub fn segment(&self) -> &'static str {
        self.path.trim_start_matches('/')
    }
}

pub const LOGIN_ROUTE: RouteDescriptor = RouteDescriptor { path: LOGIN_PATH, requires_auth: false };
pub const REGISTER_ROUTE: RouteDescriptor = RouteDescriptor { path: REGISTER_PATH, requires_auth: false };
pub const MAINTENANCE_ROUTE: RouteDescriptor = RouteDescriptor { path: MAINTENANCE_PATH, requires_auth: true };
pub const HISTORY_ROUTE: RouteDescriptor = RouteDescriptor { path: HISTORY_PATH, requires_auth: true };

pub const ROUTES: [RouteDescriptor; 4] = [LOGIN_ROUTE, REGISTER_ROUTE, MAINTENANCE_ROUTE, HISTORY_ROUTE];

/// Outcome of a navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Proceed to the requested path.
    Allowed(String),
    /// Abandon the navigation and go here instead.
    Redirected(&'static str),
}

impl NavigationDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed(_))
    }
}

/// Strip query, fragment, and trailing slashes. The root stays `/`.
fn normalize(target: &str) -> &str {
    let path = target.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { LOGIN_PATH } else { trimmed }
}

/// Route entry for `target`, ignoring query, fragment, and trailing slashes.
pub fn find_route(target: &str) -> Option<&'static RouteDescriptor> {
    let path = normalize(target);
    ROUTES.iter().find(|route| route.path == path)
}

/// Whether `target` is a protected route.
pub fn requires_auth(target: &str) -> bool {
    find_route(target).is_some_and(|route| route.requires_auth)
}

/// Decide a navigation to `target`.
///
/// Protected targets redirect to [`LOGIN_PATH`] unless authenticated; every
/// other target, including unknown paths, is allowed.
pub fn guard(target: &str, is_authenticated: bool) -> NavigationDecision {
    if requires_auth(target) && !is_authenticated {
        NavigationDecision::Redirected(LOGIN_PATH)
    } else {
        NavigationDecision::Allowed(target.to_owned())
    }
}

/// Where an unauthenticated navigation to `target` is sent.
///
/// Targets the guard never redirects fall back to [`LOGIN_PATH`]; the router
/// only consults this after a denial.
pub fn redirect_target(target: &str) -> &'static str {
    match guard(target, false) {
        NavigationDecision::Redirected(to) => to,
        NavigationDecision::Allowed(_) => LOGIN_PATH,
    }
}
