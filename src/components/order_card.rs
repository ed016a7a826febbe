//! Card summarizing one service order in the history list.

#[cfg(test)]
#[path = "order_card_test.rs"]
mod order_card_test;

use leptos::prelude::*;

use crate::net::types::ServiceOrder;

/// Render a backend timestamp (`2026-03-01T10:05:00.123`) as `01/03/2026 10:05`.
///
/// Values that do not look like ISO timestamps are returned unchanged.
fn format_timestamp(raw: &str) -> String {
    let Some((date, time)) = raw.split_once('T') else {
        return raw.to_owned();
    };
    let mut parts = date.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return raw.to_owned();
    };
    let hh_mm: String = time.chars().take(5).collect();
    format!("{day}/{month}/{year} {hh_mm}")
}

fn checklist_summary(order: &ServiceOrder) -> String {
    format!("{}/{} itens concluídos", order.completed_count(), order.checklist.len())
}

#[component]
pub fn OrderCard(order: ServiceOrder, on_edit: Callback<String>, on_delete: Callback<String>) -> impl IntoView {
    let summary = checklist_summary(&order);
    let created = order.data_criacao.as_deref().map(format_timestamp).unwrap_or_default();
    let updated = order.data_atualizacao.as_deref().map(format_timestamp);
    let edit_id = order.id.clone();
    let delete_id = order.id.clone();
    let photo = order.foto_base64.clone();
    let has_photo = !photo.is_empty();

    view! {
        <article class="order-card">
            <div class="order-card__body">
                <h3 class="order-card__title">{order.descricao}</h3>
                <p class="order-card__meta">"Criada em " {created}</p>
                {updated.map(|u| view! { <p class="order-card__meta">"Atualizada em " {u}</p> })}
                <p class="order-card__summary">{summary}</p>
            </div>
            <Show when=move || has_photo>
                <img class="order-card__photo" src=photo.clone() alt="Foto de comprovação"/>
            </Show>
            <div class="order-card__actions">
                <button class="order-card__edit" on:click=move |_| on_edit.run(edit_id.clone())>
                    "Editar"
                </button>
                <button class="order-card__delete" on:click=move |_| on_delete.run(delete_id.clone())>
                    "Excluir"
                </button>
            </div>
        </article>
    }
}
