//! Registration page. Creating an account does not sign the user in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::LOGIN_PATH;
use crate::state::auth::BrowserAuthStore;
use crate::state::toast::ToastState;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Validated registration form.
#[derive(Clone, Debug, PartialEq, Eq)]
struct RegisterInput {
    name: String,
    email: String,
    password: String,
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'),
        None => false,
    }
}

/// Password rules enforced by the backend, checked in the same order.
fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("A senha deve ter pelo menos 8 caracteres");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("A senha deve conter pelo menos uma letra maiúscula");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("A senha deve conter pelo menos um número");
    }
    Ok(())
}

fn validate_register_input(name: &str, email: &str, password: &str) -> Result<RegisterInput, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Preencha nome, e-mail e senha.");
    }
    if !looks_like_email(email) {
        return Err("Informe um e-mail válido.");
    }
    validate_password(password)?;
    Ok(RegisterInput { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<BrowserAuthStore>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_register_input(&name.get(), &email.get(), &password.get()) {
            Ok(input) => input,
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
                let store = auth.get_untracked();
                match store.register(&input.name, &input.email, &input.password).await {
                    Ok(()) => {
                        notify(toasts, ToastKind::Success, "Conta criada. Faça login para continuar.");
                        navigate(LOGIN_PATH, NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(e.user_message());
                        notify(toasts, ToastKind::Error, "Falha no cadastro.");
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (input, auth, toasts, &navigate);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Criar conta"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Nome"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        placeholder="Senha (8+ caracteres, maiúscula e número)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Registrar"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <A href=LOGIN_PATH attr:class="login-link">
                    "Já tenho conta"
                </A>
            </div>
        </div>
    }
}
