//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `auth`, `orders`, `toast`) so
//! individual components can depend on small focused models.

pub mod auth;
pub mod orders;
pub mod session;
pub mod toast;
