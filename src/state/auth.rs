//! Auth state container for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthStore` is the single owner of the in-memory [`Session`] and the only
//! component that calls the login/registration endpoints or touches the
//! session keys in storage. Route guards and pages read it from an
//! `RwSignal` provided by `App`.
//!
//! DESIGN
//! ======
//! Every mutation writes through to storage before the new session becomes
//! visible in memory; outgoing requests get their credential from
//! [`AuthStore::auth_context`] rather than from ambient state.
//!
//! CONCURRENCY
//! ===========
//! Signal helpers clone the container out, drive it across the network
//! await, and write it back. Overlapping logins are not coordinated: the
//! last one to finish wins.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::logging::{error, log, warn};
use leptos::prelude::*;

use super::session::Session;
use crate::net::api::{AuthApi, HttpAuthApi};
use crate::net::http::{ApiError, AuthContext};
use crate::util::storage::{BrowserStorage, KeyValueStore, StorageError};

/// Failure of a login, registration, or logout action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("session could not be persisted: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(e) => e.user_message(),
            Self::Storage(_) => "Não foi possível salvar a sessão neste navegador.".to_owned(),
        }
    }
}

/// Session container used by the browser app.
pub type BrowserAuthStore = AuthStore<HttpAuthApi, BrowserStorage>;

/// In-memory session plus the backend and storage it synchronizes with.
#[derive(Clone, Debug)]
pub struct AuthStore<A, S> {
    api: A,
    storage: S,
    session: Session,
    restored: bool,
}

impl<A, S: KeyValueStore> AuthStore<A, S> {
    /// Container initialized from the session already in `storage`.
    pub fn new(api: A, storage: S) -> Self {
        let session = Session::load(&storage);
        Self { api, storage, session, restored: true }
    }

    /// Container that has not read storage yet.
    ///
    /// Used for the first render so server and browser agree; guarded
    /// routes stay pending until [`AuthStore::restore`] runs in the browser.
    pub fn unrestored(api: A, storage: S) -> Self {
        Self { api, storage, session: Session::default(), restored: false }
    }

    /// Reload the session from storage. No network call is made.
    pub fn restore(&mut self) {
        self.session = Session::load(&self.storage);
        self.restored = true;
    }

    pub fn is_restored(&self) -> bool {
        self.restored
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Credential to attach to requests issued on behalf of this session.
    pub fn auth_context(&self) -> AuthContext {
        self.session.auth_context()
    }

    /// Clear the session in memory and in storage.
    ///
    /// Memory is always cleared, so the user is logged out even when
    /// storage refuses the removal.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] if a stored key could not be removed.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.session = Session::default();
        Session::clear(&self.storage).map_err(|e| {
            warn!("logout could not clear stored session: {e}");
            AuthError::Storage(e)
        })
    }
}

impl<A: AuthApi, S: KeyValueStore> AuthStore<A, S> {
    /// Authenticate against the backend and adopt the returned session.
    ///
    /// On any failure the previous session is kept in memory. If the new
    /// session cannot be written through, the previous storage mirror is put
    /// back, attempting every key. Keys storage refuses again are logged and
    /// left as they are.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Api`] if the backend call fails and
    /// [`AuthError::Storage`] if the new session cannot be written through.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        let response = self.api.login(email, password).await.map_err(|e| {
            error!("login failed: {e}");
            AuthError::Api(e)
        })?;

        let next = Session::from_login(response);
        if let Err(e) = next.persist(&self.storage) {
            error!("login succeeded but the session could not be stored: {e}");
            if let Err(restore_err) = self.session.restore_mirror(&self.storage) {
                error!("previous session could not be restored: {restore_err}");
            }
            return Err(AuthError::Storage(e));
        }

        self.session = next;
        self.restored = true;
        log!("session established");
        Ok(())
    }

    /// Create an account. The session is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Api`] with the backend or network failure.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), AuthError> {
        self.api.register(name, email, password).await.map_err(|e| {
            error!("registration failed: {e}");
            AuthError::Api(e)
        })
    }
}

/// Run [`AuthStore::login`] on the container held by `auth` and publish the
/// result.
///
/// # Errors
///
/// Propagates the [`AuthError`] from the login; `auth` is left unchanged.
pub async fn sign_in<A, S>(auth: RwSignal<AuthStore<A, S>>, email: &str, password: &str) -> Result<(), AuthError>
where
    A: AuthApi + Clone + Send + Sync + 'static,
    S: KeyValueStore + Clone + Send + Sync + 'static,
{
    let mut store = auth.get_untracked();
    store.login(email, password).await?;
    auth.set(store);
    Ok(())
}

/// Run [`AuthStore::logout`] on the container held by `auth`.
///
/// # Errors
///
/// Returns [`AuthError::Storage`] if storage refused the removal; the
/// published session is cleared regardless.
pub fn sign_out<A, S>(auth: RwSignal<AuthStore<A, S>>) -> Result<(), AuthError>
where
    A: Send + Sync + 'static,
    S: KeyValueStore + Send + Sync + 'static,
{
    let mut result = Ok(());
    auth.update(|store| result = store.logout());
    result
}
