//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ProtectedRoute, Router, Routes},
};

use crate::components::{nav_bar::NavBar, toast_host::ToastHost};
use crate::config::ApiConfig;
use crate::net::api::HttpAuthApi;
use crate::pages::{history::HistoryPage, login::LoginPage, maintenance::MaintenancePage, register::RegisterPage};
use crate::routes::{HISTORY_ROUTE, LOGIN_ROUTE, MAINTENANCE_ROUTE, REGISTER_ROUTE};
use crate::state::auth::{AuthStore, BrowserAuthStore};
use crate::state::orders::OrdersState;
use crate::state::toast::ToastState;
use crate::util::auth::{route_condition, route_redirect};
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the auth container, restores the persisted session once running
/// in the browser, provides shared state, and declares one guarded route per
/// route table entry. Public entries pass the guard unconditionally.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_build_env();
    let auth: RwSignal<BrowserAuthStore> =
        RwSignal::new(AuthStore::unrestored(HttpAuthApi::new(config.clone()), BrowserStorage));
    let orders = RwSignal::new(OrdersState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(config);
    provide_context(auth);
    provide_context(orders);
    provide_context(toasts);

    // Effects only run in the browser, after hydration.
    Effect::new(move || auth.update(AuthStore::restore));

    view! {
        <Stylesheet id="leptos" href="/pkg/os-front.css"/>
        <Title text="OS System"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Página não encontrada.".into_view()>
                    <ProtectedRoute
                        path=StaticSegment(LOGIN_ROUTE.segment())
                        view=LoginPage
                        condition=route_condition(auth, LOGIN_ROUTE.path)
                        redirect_path=route_redirect(LOGIN_ROUTE.path)
                    />
                    <ProtectedRoute
                        path=StaticSegment(REGISTER_ROUTE.segment())
                        view=RegisterPage
                        condition=route_condition(auth, REGISTER_ROUTE.path)
                        redirect_path=route_redirect(REGISTER_ROUTE.path)
                    />
                    <ProtectedRoute
                        path=StaticSegment(MAINTENANCE_ROUTE.segment())
                        view=MaintenancePage
                        condition=route_condition(auth, MAINTENANCE_ROUTE.path)
                        redirect_path=route_redirect(MAINTENANCE_ROUTE.path)
                    />
                    <ProtectedRoute
                        path=StaticSegment(HISTORY_ROUTE.segment())
                        view=HistoryPage
                        condition=route_condition(auth, HISTORY_ROUTE.path)
                        redirect_path=route_redirect(HISTORY_ROUTE.path)
                    />
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
