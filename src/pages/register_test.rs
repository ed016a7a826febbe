use super::*;

// =============================================================
// Password rules
// =============================================================

#[test]
fn password_too_short_is_rejected_first() {
    assert_eq!(validate_password("Ab1"), Err("A senha deve ter pelo menos 8 caracteres"));
}

#[test]
fn password_without_uppercase_is_rejected() {
    assert_eq!(validate_password("secret123"), Err("A senha deve conter pelo menos uma letra maiúscula"));
}

#[test]
fn password_without_digit_is_rejected() {
    assert_eq!(validate_password("SecretPass"), Err("A senha deve conter pelo menos um número"));
}

#[test]
fn password_length_counts_characters_not_bytes() {
    assert_eq!(validate_password("Çç1ãããã"), Err("A senha deve ter pelo menos 8 caracteres"));
    assert_eq!(validate_password("Secret123"), Ok(()));
}

// =============================================================
// Whole form
// =============================================================

#[test]
fn register_input_is_trimmed() {
    assert_eq!(
        validate_register_input("  Ana ", " ana@example.com ", "Secret123"),
        Ok(RegisterInput {
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
            password: "Secret123".to_owned(),
        })
    );
}

#[test]
fn register_input_requires_every_field() {
    assert_eq!(validate_register_input("", "ana@example.com", "Secret123"), Err("Preencha nome, e-mail e senha."));
    assert_eq!(validate_register_input("Ana", "  ", "Secret123"), Err("Preencha nome, e-mail e senha."));
    assert_eq!(validate_register_input("Ana", "ana@example.com", ""), Err("Preencha nome, e-mail e senha."));
}

#[test]
fn register_input_rejects_malformed_email() {
    for email in ["ana", "@example.com", "ana@example", "ana@.com", "ana@example."] {
        assert_eq!(validate_register_input("Ana", email, "Secret123"), Err("Informe um e-mail válido."), "{email}");
    }
}
