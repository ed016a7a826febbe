use super::*;

fn order(id: &str, created: &str) -> ServiceOrder {
    ServiceOrder {
        id: id.to_owned(),
        descricao: format!("ordem {id}"),
        checklist: Vec::new(),
        foto_base64: String::new(),
        usuario_email: "ana@example.com".to_owned(),
        data_criacao: Some(created.to_owned()),
        data_atualizacao: None,
    }
}

#[test]
fn orders_state_default_is_empty() {
    let state = OrdersState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.editing.is_none());
}

#[test]
fn replace_sorts_newest_first_and_clears_error() {
    let mut state = OrdersState { loading: true, error: Some("old".to_owned()), ..OrdersState::default() };
    state.replace(vec![order("a", "2026-01-01T08:00:00"), order("b", "2026-02-01T08:00:00")]);
    assert_eq!(state.items[0].id, "b");
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn begin_edit_selects_listed_order_only() {
    let mut state = OrdersState::default();
    state.replace(vec![order("a", "2026-01-01T08:00:00")]);
    assert!(state.begin_edit("a"));
    assert_eq!(state.take_editing().map(|o| o.id).as_deref(), Some("a"));
    assert!(state.editing.is_none());
    assert!(!state.begin_edit("missing"));
}

#[test]
fn remove_drops_item_and_matching_edit() {
    let mut state = OrdersState::default();
    state.replace(vec![order("a", "2026-01-01T08:00:00"), order("b", "2026-01-02T08:00:00")]);
    state.begin_edit("a");
    state.remove("a");
    assert_eq!(state.items.len(), 1);
    assert!(state.editing.is_none());
}

#[test]
fn fail_records_message() {
    let mut state = OrdersState { loading: true, ..OrdersState::default() };
    state.fail("sem conexão".to_owned());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("sem conexão"));
}

#[test]
fn empty_listing_only_after_successful_empty_load() {
    let mut state = OrdersState { loading: true, ..OrdersState::default() };
    assert!(!state.is_empty_listing());
    state.replace(Vec::new());
    assert!(state.is_empty_listing());
    state.fail("falhou".to_owned());
    assert!(!state.is_empty_listing());
    state.replace(vec![order("a", "2026-01-01T08:00:00")]);
    assert!(!state.is_empty_listing());
}
