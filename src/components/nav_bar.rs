//! Top navigation bar with the signed-in user's name and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered only while a session exists. Logging out clears the session; the
//! protected route conditions react to that and send the user back to `/`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{HISTORY_PATH, MAINTENANCE_PATH};
use crate::state::auth::{BrowserAuthStore, sign_out};
use crate::state::orders::OrdersState;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<BrowserAuthStore>>();
    let orders = expect_context::<RwSignal<OrdersState>>();

    let user_label = move || {
        auth.with(|store| {
            let session = store.session();
            session
                .user_name
                .clone()
                .or_else(|| session.user_email.clone())
                .unwrap_or_else(|| "Usuário".to_owned())
        })
    };

    let on_logout = move |_| {
        if let Err(e) = sign_out(auth) {
            leptos::logging::warn!("logout incomplete: {e}");
        }
        orders.set(OrdersState::default());
    };

    view! {
        <Show when=move || auth.with(BrowserAuthStore::is_authenticated)>
            <nav class="nav-bar">
                <span class="nav-bar__brand">"OS System"</span>
                <A href=MAINTENANCE_PATH attr:class="nav-bar__link">"Manutenção"</A>
                <A href=HISTORY_PATH attr:class="nav-bar__link">"Histórico"</A>
                <span class="nav-bar__spacer"></span>
                <span class="nav-bar__user">{user_label}</span>
                <button class="nav-bar__logout" on:click=on_logout>
                    "Sair"
                </button>
            </nav>
        </Show>
    }
}
