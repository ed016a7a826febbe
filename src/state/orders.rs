//! Service-order list and edit-selection state.
//!
//! DESIGN
//! ======
//! The history page fills `items`; picking "edit" parks a copy in `editing`
//! that the maintenance page consumes, so the two routes share no URL state.

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use crate::net::types::ServiceOrder;

/// Shared order state for the history and maintenance views.
#[derive(Clone, Debug, Default)]
pub struct OrdersState {
    pub items: Vec<ServiceOrder>,
    pub loading: bool,
    pub editing: Option<ServiceOrder>,
    pub error: Option<String>,
}

impl OrdersState {
    /// Replace the list with a fresh backend listing, newest first.
    pub fn replace(&mut self, mut items: Vec<ServiceOrder>) {
        items.sort_by(|a, b| b.data_criacao.cmp(&a.data_criacao));
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Select `order_id` for editing. Returns `false` if it is not listed.
    pub fn begin_edit(&mut self, order_id: &str) -> bool {
        self.editing = self.items.iter().find(|o| o.id == order_id).cloned();
        self.editing.is_some()
    }

    /// Take the pending edit selection, leaving none behind.
    pub fn take_editing(&mut self) -> Option<ServiceOrder> {
        self.editing.take()
    }

    /// Loaded successfully and nothing is listed.
    pub fn is_empty_listing(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }

    pub fn remove(&mut self, order_id: &str) {
        self.items.retain(|o| o.id != order_id);
        if self.editing.as_ref().is_some_and(|o| o.id == order_id) {
            self.editing = None;
        }
    }
}
