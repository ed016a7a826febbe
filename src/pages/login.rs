//! Login page: email + password exchanged for a session token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::REGISTER_PATH;
use crate::state::auth::BrowserAuthStore;
use crate::state::toast::ToastState;

/// Trim the email and require both fields.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Informe e-mail e senha.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<BrowserAuthStore>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            use crate::components::toast_host::notify;
            use crate::state::toast::ToastKind;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::state::auth::sign_in(auth, &email_value, &password_value).await {
                    Ok(()) => {
                        password.set(String::new());
                        notify(toasts, ToastKind::Success, "Login realizado com sucesso.");
                        navigate(crate::routes::MAINTENANCE_PATH, NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(e.user_message());
                        notify(toasts, ToastKind::Error, "Falha no login.");
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, auth, toasts, &navigate);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"OS System"</h1>
                <p class="login-card__subtitle">"Acesse sua conta"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="voce@empresa.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Senha"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Entrar"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <A href=REGISTER_PATH attr:class="login-link">
                    "Criar uma conta"
                </A>
            </div>
        </div>
    }
}
