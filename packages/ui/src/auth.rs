//! Authentication context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Fetch the current user on mount
    let _ = use_resource(move || async move {
        let user = match api::get_current_user().await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Failed to load current user: {}", e);
                None
            }
        };
        auth_state.set(AuthState {
            user,
            loading: false,
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Email and password form with a toggle between sign-in and sign-up.
///
/// On success the auth context is updated in place, so any screen reading
/// [`use_auth`] re-renders with the signed-in user.
#[component]
pub fn AuthForm() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut sign_up = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let result = if sign_up() {
                api::register(email(), password()).await
            } else {
                api::login_password(email(), password()).await
            };

            match result {
                Ok(user) => {
                    auth.set(AuthState {
                        user: Some(user),
                        loading: false,
                    });
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-card",

            div {
                class: "auth-icon",
                i { class: "fa-solid fa-user-lock" }
            }
            h2 {
                class: "auth-title",
                if sign_up() { "Criar Conta" } else { "Área do Editor" }
            }
            p { class: "auth-subtitle", "Acesse para gerenciar seu cartão digital" }

            if let Some(err) = error() {
                div { class: "alert alert-error", "{err}" }
            }

            form {
                class: "auth-form",
                onsubmit: handle_submit,

                input {
                    r#type: "email",
                    placeholder: "E-MAIL",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "SENHA",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    class: "btn btn-gold",
                    disabled: loading(),
                    if loading() {
                        i { class: "fa-solid fa-spinner fa-spin" }
                    } else if sign_up() {
                        "CRIAR CONTA"
                    } else {
                        "ENTRAR"
                    }
                }
            }

            button {
                class: "auth-toggle",
                onclick: move |_| {
                    error.set(None);
                    sign_up.set(!sign_up());
                },
                if sign_up() { "Já tem conta? Entrar" } else { "Não tem conta? Criar agora" }
            }
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "SAIR".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: EventHandler<()>,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| async move {
        match api::logout().await {
            Ok(()) => {
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                });
                on_logout.call(());
            }
            Err(e) => tracing::error!("Logout failed: {}", e),
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
