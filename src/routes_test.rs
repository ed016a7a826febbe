use super::*;

// =============================================================
// Route table
// =============================================================

#[test]
fn table_protects_only_maintenance_and_history() {
    let protected: Vec<_> = ROUTES.iter().filter(|r| r.requires_auth).map(|r| r.path).collect();
    assert_eq!(protected, vec![MAINTENANCE_PATH, HISTORY_PATH]);
}

#[test]
fn segments_drop_the_leading_slash() {
    assert_eq!(LOGIN_ROUTE.segment(), "");
    assert_eq!(REGISTER_ROUTE.segment(), "registrar");
    assert_eq!(MAINTENANCE_ROUTE.segment(), "manutencao");
    assert_eq!(HISTORY_ROUTE.segment(), "historico");
}

#[test]
fn find_route_ignores_query_fragment_and_trailing_slash() {
    assert_eq!(find_route("/historico?page=2"), Some(&HISTORY_ROUTE));
    assert_eq!(find_route("/manutencao/"), Some(&MAINTENANCE_ROUTE));
    assert_eq!(find_route("/manutencao#topo"), Some(&MAINTENANCE_ROUTE));
    assert_eq!(find_route(""), Some(&LOGIN_ROUTE));
    assert_eq!(find_route("/?next=x"), Some(&LOGIN_ROUTE));
    assert!(find_route("/desconhecida").is_none());
}

#[test]
fn find_route_is_case_sensitive_like_the_router() {
    assert!(find_route("/Manutencao").is_none());
}

// =============================================================
// guard
// =============================================================

#[test]
fn protected_routes_redirect_without_session() {
    for path in [MAINTENANCE_PATH, HISTORY_PATH, "/historico/", "/historico?page=2"] {
        assert_eq!(guard(path, false), NavigationDecision::Redirected(LOGIN_PATH), "{path}");
    }
}

#[test]
fn protected_routes_proceed_with_session() {
    for path in [MAINTENANCE_PATH, HISTORY_PATH] {
        assert_eq!(guard(path, true), NavigationDecision::Allowed(path.to_owned()));
    }
}

#[test]
fn public_routes_always_proceed() {
    for authenticated in [false, true] {
        assert_eq!(guard(LOGIN_PATH, authenticated), NavigationDecision::Allowed("/".to_owned()));
        assert_eq!(guard(REGISTER_PATH, authenticated), NavigationDecision::Allowed("/registrar".to_owned()));
    }
}

#[test]
fn unknown_routes_are_not_guarded() {
    assert!(guard("/sobre", false).is_allowed());
}

#[test]
fn guard_keeps_no_memory_between_attempts() {
    assert!(guard(HISTORY_PATH, true).is_allowed());
    assert!(!guard(HISTORY_PATH, false).is_allowed());
    assert!(guard(HISTORY_PATH, true).is_allowed());
}

// =============================================================
// redirect_target
// =============================================================

#[test]
fn redirect_target_is_login_for_every_route() {
    for route in ROUTES {
        assert_eq!(redirect_target(route.path), LOGIN_PATH, "{}", route.path);
    }
}
