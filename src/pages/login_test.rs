use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  ana@example.com ", "Secret123"),
        Ok(("ana@example.com".to_owned(), "Secret123".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("ana@example.com", " pass "),
        Ok(("ana@example.com".to_owned(), " pass ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "Secret123"), Err("Informe e-mail e senha."));
    assert_eq!(validate_login_input("ana@example.com", ""), Err("Informe e-mail e senha."));
}
