//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and list items while reading/writing shared
//! state from Leptos context providers.

pub mod nav_bar;
pub mod order_card;
pub mod toast_host;
