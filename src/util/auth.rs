//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route in the table applies the same guard, so the condition and the
//! redirect handed to `ProtectedRoute` are built here from the auth signal
//! and the route table.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::routes::{self, guard};
use crate::state::auth::AuthStore;
use crate::util::storage::KeyValueStore;

/// Access decision for `path`.
///
/// Public paths are always allowed. Protected paths are `None` while the
/// session has not been restored from storage, which keeps them pending
/// instead of redirecting during the first render.
pub fn route_access(path: &str, restored: bool, is_authenticated: bool) -> Option<bool> {
    if !routes::requires_auth(path) {
        return Some(true);
    }
    restored.then(|| guard(path, is_authenticated).is_allowed())
}

/// Reactive `ProtectedRoute` condition for `path`.
pub fn route_condition<A, S>(
    auth: RwSignal<AuthStore<A, S>>,
    path: &'static str,
) -> impl Fn() -> Option<bool> + Clone + Send + Sync + 'static
where
    A: Send + Sync + 'static,
    S: KeyValueStore + Send + Sync + 'static,
{
    move || auth.with(|store| route_access(path, store.is_restored(), store.is_authenticated()))
}

/// `ProtectedRoute` redirect for `path`, taken from the guard's decision.
pub fn route_redirect(path: &'static str) -> impl Fn() -> &'static str + Clone + Send + Sync + 'static {
    move || routes::redirect_target(path)
}
