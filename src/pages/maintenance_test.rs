use super::*;

fn valid_draft() -> OrderDraft {
    OrderDraft {
        descricao: "Troca do filtro de ar".to_owned(),
        checklist: vec![
            ChecklistItem { tarefa: "Desligar equipamento".to_owned(), concluido: true },
            ChecklistItem::new("Limpar bandeja"),
        ],
        foto_base64: photo_data_url("image/png", &[7u8; 96]),
    }
}

// =============================================================
// validate_draft
// =============================================================

#[test]
fn valid_draft_passes() {
    assert_eq!(validate_draft(&valid_draft()), Ok(()));
}

#[test]
fn blank_description_is_rejected() {
    let draft = OrderDraft { descricao: "   ".to_owned(), ..valid_draft() };
    assert_eq!(validate_draft(&draft), Err("Descreva a manutenção realizada."));
}

#[test]
fn draft_needs_a_concluded_item() {
    let draft = OrderDraft { checklist: vec![ChecklistItem::new("Limpar bandeja")], ..valid_draft() };
    assert_eq!(validate_draft(&draft), Err("Pelo menos um item do checklist deve estar concluído"));

    let empty = OrderDraft { checklist: Vec::new(), ..valid_draft() };
    assert_eq!(validate_draft(&empty), Err("Pelo menos um item do checklist deve estar concluído"));
}

#[test]
fn draft_needs_a_photo_of_minimum_length() {
    let missing = OrderDraft { foto_base64: String::new(), ..valid_draft() };
    assert_eq!(validate_draft(&missing), Err("A foto de comprovação é obrigatória"));

    let short = OrderDraft { foto_base64: "x".repeat(MIN_PHOTO_LEN - 1), ..valid_draft() };
    assert_eq!(validate_draft(&short), Err("A foto de comprovação é obrigatória"));
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn photo_data_url_encodes_bytes() {
    assert_eq!(photo_data_url("image/png", b"abc"), "data:image/png;base64,YWJj");
}

#[test]
fn photo_data_url_defaults_mime() {
    assert!(photo_data_url("", b"abc").starts_with("data:image/jpeg;base64,"));
}

#[test]
fn toggle_item_flips_only_target_and_ignores_out_of_range() {
    let mut items = valid_draft().checklist;
    toggle_item(&mut items, 1);
    assert!(items[0].concluido);
    assert!(items[1].concluido);
    toggle_item(&mut items, 0);
    assert!(!items[0].concluido);
    toggle_item(&mut items, 9);
    assert_eq!(items.len(), 2);
}

#[test]
fn fallback_checklist_has_general_check() {
    assert_eq!(fallback_checklist(), vec![ChecklistItem::new("Verificação Geral")]);
}
