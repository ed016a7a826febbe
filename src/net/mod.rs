//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `http` owns credentials, errors and
//! request dispatch, and `api` exposes one function per backend endpoint.

pub mod api;
pub mod http;
pub mod types;
