//! Wire DTOs for the backend's auth and service-order endpoints.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON exactly (`senha`, `descricao`,
//! `foto_base64`, ...) so serde needs no renames on the hot path.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub senha: &'a str,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user_email: String,
    #[serde(default)]
    pub user_name: Option<String>,
}

/// One checklist task on a service order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub tarefa: String,
    #[serde(default)]
    pub concluido: bool,
}

impl ChecklistItem {
    pub fn new(tarefa: impl Into<String>) -> Self {
        Self { tarefa: tarefa.into(), concluido: false }
    }
}

/// Writable part of a service order, sent on create and update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub descricao: String,
    pub checklist: Vec<ChecklistItem>,
    pub foto_base64: String,
}

/// A service order as listed by `GET /ordens-servico/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOrder {
    pub id: String,
    pub descricao: String,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default)]
    pub foto_base64: String,
    #[serde(default)]
    pub usuario_email: String,
    #[serde(default)]
    pub data_criacao: Option<String>,
    #[serde(default)]
    pub data_atualizacao: Option<String>,
}

impl ServiceOrder {
    /// Editable copy of this order.
    pub fn to_draft(&self) -> OrderDraft {
        OrderDraft {
            descricao: self.descricao.clone(),
            checklist: self.checklist.clone(),
            foto_base64: self.foto_base64.clone(),
        }
    }

    /// Number of concluded checklist items.
    pub fn completed_count(&self) -> usize {
        self.checklist.iter().filter(|item| item.concluido).count()
    }
}

/// `{"message": ..., "id": ...}` returned by create endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub id: String,
}

/// Human-readable message from an error response body.
///
/// Understands `{"detail": "..."}` and validation errors shaped as
/// `{"detail": [{"msg": "..."}, ...]}`, where the first message wins.
pub fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        serde_json::Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
            .map(|msg| msg.trim_start_matches("Value error, ").to_owned()),
        _ => None,
    }
}
