//! History page listing the signed-in user's service orders.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached only through the navigation guard. Loads the listing on mount,
//! hands an order to the maintenance page for editing, and deletes orders in
//! place.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::order_card::OrderCard;
use crate::config::ApiConfig;
use crate::routes::MAINTENANCE_PATH;
use crate::state::auth::BrowserAuthStore;
use crate::state::orders::OrdersState;
use crate::state::toast::ToastState;

#[component]
pub fn HistoryPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<BrowserAuthStore>>();
    let orders = expect_context::<RwSignal<OrdersState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = expect_context::<ApiConfig>();

    orders.update(|s| {
        s.loading = true;
        s.error = None;
    });

    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        let ctx = auth.get_untracked().auth_context();
        leptos::task::spawn_local(async move {
            match crate::net::api::list_orders(&config, &ctx).await {
                Ok(items) => orders.update(|s| s.replace(items)),
                Err(e) => {
                    leptos::logging::warn!("order listing failed: {e}");
                    orders.update(|s| s.fail(e.user_message()));
                }
            }
        });
    }

    // Editing hands the order over to the maintenance page.
    let navigate_to_editor = use_navigate();
    Effect::new(move || {
        if orders.with(|s| s.editing.is_some()) {
            navigate_to_editor(MAINTENANCE_PATH, NavigateOptions::default());
        }
    });

    let on_edit = Callback::new(move |order_id: String| {
        orders.update(|s| {
            s.begin_edit(&order_id);
        });
    });

    let on_delete = Callback::new(move |order_id: String| {
        #[cfg(feature = "hydrate")]
        {
            use crate::components::toast_host::notify;
            use crate::state::toast::ToastKind;

            let config = config.clone();
            let ctx = auth.get_untracked().auth_context();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_order(&config, &ctx, &order_id).await {
                    Ok(()) => {
                        orders.update(|s| s.remove(&order_id));
                        notify(toasts, ToastKind::Success, "Ordem de serviço excluída.");
                    }
                    Err(e) => notify(toasts, ToastKind::Error, e.user_message()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (order_id, auth, toasts, &config);
        }
    });

    view! {
        <section class="history-page">
            <header class="history-page__header">
                <h1>"Histórico de manutenções"</h1>
                <A href=MAINTENANCE_PATH attr:class="history-page__new">
                    "Nova manutenção"
                </A>
            </header>
            <Show when=move || orders.with(|s| s.loading)>
                <p class="history-page__status">"Carregando..."</p>
            </Show>
            <Show when=move || orders.with(|s| s.error.is_some())>
                <p class="history-page__status history-page__status--error">
                    {move || orders.with(|s| s.error.clone().unwrap_or_default())}
                </p>
            </Show>
            <Show when=move || orders.with(OrdersState::is_empty_listing)>
                <p class="history-page__status">"Nenhuma ordem de serviço registrada."</p>
            </Show>
            <div class="history-page__list">
                {move || {
                    orders
                        .with(|s| s.items.clone())
                        .into_iter()
                        .map(|order| view! { <OrderCard order=order on_edit=on_edit on_delete=on_delete/> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
