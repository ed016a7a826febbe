//! Maintenance page: create a service order, or edit one picked from the
//! history.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached only through the navigation guard. New orders start from the
//! backend's checklist template; edits start from the order parked in
//! `OrdersState::editing` by the history page.

#[cfg(test)]
#[path = "maintenance_test.rs"]
mod maintenance_test;

use base64::Engine as _;
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ApiConfig;
use crate::net::types::{ChecklistItem, OrderDraft};
use crate::state::auth::BrowserAuthStore;
use crate::state::orders::OrdersState;
use crate::state::toast::ToastState;

/// Shortest encoded photo the backend accepts.
pub const MIN_PHOTO_LEN: usize = 100;

const DEFAULT_PHOTO_MIME: &str = "image/jpeg";

/// Checklist used when the backend has no template configured.
fn fallback_checklist() -> Vec<ChecklistItem> {
    vec![ChecklistItem::new("Verificação Geral")]
}

/// Client-side copy of the backend's order validators.
fn validate_draft(draft: &OrderDraft) -> Result<(), &'static str> {
    if draft.descricao.trim().is_empty() {
        return Err("Descreva a manutenção realizada.");
    }
    if !draft.checklist.iter().any(|item| item.concluido) {
        return Err("Pelo menos um item do checklist deve estar concluído");
    }
    if draft.foto_base64.len() < MIN_PHOTO_LEN {
        return Err("A foto de comprovação é obrigatória");
    }
    Ok(())
}

/// Encode image bytes as a `data:` URL.
fn photo_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() { DEFAULT_PHOTO_MIME } else { mime };
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{encoded}")
}

fn toggle_item(checklist: &mut [ChecklistItem], index: usize) {
    if let Some(item) = checklist.get_mut(index) {
        item.concluido = !item.concluido;
    }
}

#[cfg(feature = "hydrate")]
async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

#[component]
pub fn MaintenancePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<BrowserAuthStore>>();
    let orders = expect_context::<RwSignal<OrdersState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = expect_context::<ApiConfig>();
    let navigate = use_navigate();

    let editing_id = RwSignal::new(None::<String>);
    let descricao = RwSignal::new(String::new());
    let checklist = RwSignal::new(Vec::<ChecklistItem>::new());
    let photo = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let mut pending = None;
    orders.update(|s| pending = s.take_editing());
    if let Some(order) = pending {
        editing_id.set(Some(order.id.clone()));
        let draft = order.to_draft();
        descricao.set(draft.descricao);
        checklist.set(draft.checklist);
        photo.set(draft.foto_base64);
    } else {
        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let ctx = auth.get_untracked().auth_context();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_checklist(&config, &ctx).await {
                    Ok(items) if !items.is_empty() => checklist.set(items),
                    Ok(_) => checklist.set(fallback_checklist()),
                    Err(e) => {
                        leptos::logging::warn!("checklist template unavailable: {e}");
                        checklist.set(fallback_checklist());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        checklist.set(fallback_checklist());
    }

    let on_photo = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match read_file_bytes(&file).await {
                    Ok(bytes) => photo.set(photo_data_url(&file.type_(), &bytes)),
                    Err(e) => {
                        leptos::logging::error!("photo read failed: {e}");
                        info.set("Não foi possível ler a foto.".to_owned());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = OrderDraft { descricao: descricao.get().trim().to_owned(), checklist: checklist.get(), foto_base64: photo.get() };
        if let Err(msg) = validate_draft(&draft) {
            info.set(msg.to_owned());
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            use crate::components::toast_host::notify;
            use crate::state::toast::ToastKind;

            let config = config.clone();
            let ctx = auth.get_untracked().auth_context();
            let navigate = navigate.clone();
            let target = editing_id.get_untracked();
            leptos::task::spawn_local(async move {
                let result = match target.as_deref() {
                    Some(id) => crate::net::api::update_order(&config, &ctx, id, &draft).await,
                    None => crate::net::api::create_order(&config, &ctx, &draft).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        let message = if target.is_some() { "Ordem de serviço atualizada." } else { "Ordem de serviço registrada." };
                        notify(toasts, ToastKind::Success, message);
                        navigate(crate::routes::HISTORY_PATH, NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(e.user_message());
                        notify(toasts, ToastKind::Error, "Falha ao salvar a ordem de serviço.");
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, auth, toasts, &config, &navigate);
        }
    };

    let title = move || if editing_id.get().is_some() { "Editar manutenção" } else { "Nova manutenção" };

    view! {
        <section class="maintenance-page">
            <h1>{title}</h1>
            <form class="order-form" on:submit=on_submit>
                <label class="order-form__label">"Descrição"</label>
                <textarea
                    class="order-form__description"
                    rows="4"
                    prop:value=move || descricao.get()
                    on:input=move |ev| descricao.set(event_target_value(&ev))
                ></textarea>

                <fieldset class="order-form__checklist">
                    <legend>"Checklist"</legend>
                    {move || {
                        checklist
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| {
                                view! {
                                    <label class="order-form__item">
                                        <input
                                            type="checkbox"
                                            prop:checked=item.concluido
                                            on:change=move |_| checklist.update(|items| toggle_item(items, index))
                                        />
                                        {item.tarefa}
                                    </label>
                                }
                            })
                            .collect_view()
                    }}
                </fieldset>

                <label class="order-form__label">"Foto de comprovação"</label>
                <input type="file" accept="image/*" on:change=on_photo/>
                <Show when=move || !photo.get().is_empty()>
                    <img class="order-form__preview" src=move || photo.get() alt="Foto de comprovação"/>
                </Show>

                <button class="order-form__submit" type="submit" disabled=move || busy.get()>
                    "Salvar"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="order-form__message">{move || info.get()}</p>
            </Show>
        </section>
    }
}
