use super::*;

#[test]
fn push_places_newest_on_top() {
    let mut state = ToastState::default();
    state.push(ToastKind::Info, "primeiro");
    state.push(ToastKind::Success, "segundo");
    assert_eq!(state.items[0].message, "segundo");
    assert_eq!(state.items[1].message, "primeiro");
}

#[test]
fn push_evicts_oldest_beyond_limit() {
    let mut state = ToastState::default();
    for i in 0..7 {
        state.push(ToastKind::Info, format!("toast {i}"));
    }
    assert_eq!(state.items.len(), MAX_TOASTS);
    assert_eq!(state.items[0].message, "toast 6");
    assert_eq!(state.items[MAX_TOASTS - 1].message, "toast 2");
}

#[test]
fn ids_are_unique_and_dismiss_removes_one() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Error, "a");
    let b = state.push(ToastKind::Error, "b");
    assert_ne!(a, b);
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn kinds_map_to_distinct_classes() {
    assert_ne!(ToastKind::Success.css_class(), ToastKind::Error.css_class());
    assert_eq!(ToastKind::Info.css_class(), "toast toast--info");
}
