//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Input validation lives next to the page that collects it.

pub mod history;
pub mod login;
pub mod maintenance;
pub mod register;
