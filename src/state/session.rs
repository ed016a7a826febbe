//! The persisted session tuple and its storage mirror.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Session` is the in-memory copy owned by the auth container. Its durable
//! mirror lives under three fixed `localStorage` keys, written through on
//! every mutation and read once at start-up.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::http::AuthContext;
use crate::net::types::LoginResponse;
use crate::util::storage::{KeyValueStore, StorageError};

pub const TOKEN_KEY: &str = "token";
pub const USER_EMAIL_KEY: &str = "userEmail";
pub const USER_NAME_KEY: &str = "userName";

const SESSION_KEYS: [&str; 3] = [TOKEN_KEY, USER_EMAIL_KEY, USER_NAME_KEY];

/// Current identity: bearer token plus display data.
///
/// Only `token` decides whether the user is authenticated; the email and
/// name are display data and may be missing on their own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
}

impl Session {
    /// Read the mirror. Empty stored strings count as absent.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let read = |key: &str| store.get(key).filter(|value| !value.is_empty());
        Self {
            token: read(TOKEN_KEY),
            user_email: read(USER_EMAIL_KEY),
            user_name: read(USER_NAME_KEY),
        }
    }

    /// Session established by a successful login.
    pub fn from_login(response: LoginResponse) -> Self {
        Self {
            token: Some(response.access_token),
            user_email: Some(response.user_email),
            user_name: response.user_name,
        }
    }

    /// Whether the token is present and non-empty. Expiry is not checked.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|token| !token.is_empty())
    }

    /// Credential for outgoing requests made on behalf of this session.
    pub fn auth_context(&self) -> AuthContext {
        AuthContext::from_token(self.token.as_deref())
    }

    /// Write every field through to `store`; `None` fields are removed.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first refused write.
    pub fn persist<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<(), StorageError> {
        for (key, value) in self.fields() {
            write_field(store, key, value)?;
        }
        Ok(())
    }

    /// Write every field through to `store` like [`Session::persist`], but
    /// attempt every key even if an earlier one fails.
    ///
    /// Used to put back a previous mirror after a refused write, where
    /// stopping early would leave keys from the rejected session behind.
    ///
    /// # Errors
    ///
    /// Returns the first refused write or removal.
    pub fn restore_mirror<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<(), StorageError> {
        let mut first_err = None;
        for (key, value) in self.fields() {
            if let Err(e) = write_field(store, key, value) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    /// Remove all three keys from `store`.
    ///
    /// Every removal is attempted even if an earlier one fails.
    ///
    /// # Errors
    ///
    /// Returns the first removal failure.
    pub fn clear<S: KeyValueStore + ?Sized>(store: &S) -> Result<(), StorageError> {
        let mut first_err = None;
        for key in SESSION_KEYS {
            if let Err(e) = store.remove(key) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    fn fields(&self) -> [(&'static str, Option<&str>); 3] {
        [
            (TOKEN_KEY, self.token.as_deref()),
            (USER_EMAIL_KEY, self.user_email.as_deref()),
            (USER_NAME_KEY, self.user_name.as_deref()),
        ]
    }
}

fn write_field<S: KeyValueStore + ?Sized>(store: &S, key: &str, value: Option<&str>) -> Result<(), StorageError> {
    match value {
        Some(value) => store.set(key, value),
        None => store.remove(key),
    }
}
