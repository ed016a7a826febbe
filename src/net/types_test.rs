use super::*;

// =============================================================
// Request bodies
// =============================================================

#[test]
fn login_request_uses_senha_field() {
    let body = serde_json::to_value(LoginRequest { email: "a@b.com", senha: "Secret123" }).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.com", "senha": "Secret123" }));
}

#[test]
fn register_request_uses_password_field() {
    let body = serde_json::to_value(RegisterRequest { name: "Ana", email: "a@b.com", password: "Secret123" }).unwrap();
    assert_eq!(body, serde_json::json!({ "name": "Ana", "email": "a@b.com", "password": "Secret123" }));
}

// =============================================================
// Response bodies
// =============================================================

#[test]
fn login_response_parses_backend_payload() {
    let raw = r#"{"access_token":"jwt","token_type":"bearer","user_email":"a@b.com","user_name":"Ana"}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.access_token, "jwt");
    assert_eq!(resp.user_email, "a@b.com");
    assert_eq!(resp.user_name.as_deref(), Some("Ana"));
}

#[test]
fn login_response_tolerates_missing_name() {
    let raw = r#"{"access_token":"jwt","user_email":"a@b.com"}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.user_name, None);
    assert_eq!(resp.token_type, None);
}

#[test]
fn service_order_parses_list_item_and_counts_completed() {
    let raw = r#"{
        "id": "65f0",
        "descricao": "Troca de filtro",
        "checklist": [{"tarefa": "Desligar", "concluido": true}, {"tarefa": "Limpar"}],
        "foto_base64": "data:image/png;base64,AAAA",
        "usuario_email": "a@b.com",
        "data_criacao": "2026-03-01T10:00:00"
    }"#;
    let order: ServiceOrder = serde_json::from_str(raw).unwrap();
    assert_eq!(order.completed_count(), 1);
    assert!(!order.checklist[1].concluido);
    assert_eq!(order.data_atualizacao, None);

    let draft = order.to_draft();
    assert_eq!(draft.descricao, "Troca de filtro");
    assert_eq!(draft.checklist.len(), 2);
}

// =============================================================
// error_detail
// =============================================================

#[test]
fn error_detail_reads_string_detail() {
    assert_eq!(
        error_detail(r#"{"detail":"E-mail ou senha incorretos"}"#).as_deref(),
        Some("E-mail ou senha incorretos")
    );
}

#[test]
fn error_detail_reads_first_validation_message() {
    let body = r#"{"detail":[{"loc":["body","password"],"msg":"Value error, A senha deve conter pelo menos um número","type":"value_error"}]}"#;
    assert_eq!(error_detail(body).as_deref(), Some("A senha deve conter pelo menos um número"));
}

#[test]
fn error_detail_is_none_for_unstructured_body() {
    assert_eq!(error_detail("Internal Server Error"), None);
    assert_eq!(error_detail(r#"{"message":"nope"}"#), None);
}
