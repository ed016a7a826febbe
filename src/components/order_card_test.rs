use super::*;
use crate::net::types::ChecklistItem;

#[test]
fn format_timestamp_renders_brazilian_date() {
    assert_eq!(format_timestamp("2026-03-01T10:05:00.123456"), "01/03/2026 10:05");
}

#[test]
fn format_timestamp_passes_through_unexpected_values() {
    assert_eq!(format_timestamp("ontem"), "ontem");
    assert_eq!(format_timestamp("2026T10:00"), "2026T10:00");
}

#[test]
fn checklist_summary_counts_concluded_items() {
    let order = ServiceOrder {
        id: "1".to_owned(),
        descricao: "Revisão".to_owned(),
        checklist: vec![
            ChecklistItem { tarefa: "a".to_owned(), concluido: true },
            ChecklistItem::new("b"),
            ChecklistItem { tarefa: "c".to_owned(), concluido: true },
        ],
        foto_base64: String::new(),
        usuario_email: String::new(),
        data_criacao: None,
        data_atualizacao: None,
    };
    assert_eq!(checklist_summary(&order), "2/3 itens concluídos");
}
