//! Owner dashboard at `/dashboard`: sign-in, then the card editor.
//!
//! The access status shown here comes from the server together with the card,
//! computed by the same gate the public page uses, so the badge and the
//! public page never disagree.

use dioxus::prelude::*;
use store::models::{default_custom_actions, ActionKind, CardContent, QuickAction};
use store::{AccessStatus, DashboardCard, Route};

use crate::{
    copy_to_clipboard, use_auth, use_site_config, AccessBadge, AuthForm, LoadingScreen,
    LogoutButton, PremiumModal, TrialBanner,
};

/// Editor state shared by the loader and the save handler.
#[derive(Clone, Copy, PartialEq)]
struct Editor {
    content: Signal<CardContent>,
    access: Signal<Option<AccessStatus>>,
    saved: Signal<bool>,
}

impl Editor {
    fn apply(mut self, card: DashboardCard) {
        self.content.set(card.content);
        self.access.set(Some(card.access));
        self.saved.set(card.saved);
    }
}

#[derive(Clone, PartialEq)]
enum Notice {
    Success(String),
    Error(String),
}

#[component]
pub fn DashboardView(on_navigate: EventHandler<String>) -> Element {
    let auth = use_auth();
    let editor = Editor {
        content: use_signal(CardContent::blank),
        access: use_signal(|| None),
        saved: use_signal(|| false),
    };
    let mut loading = use_signal(|| true);
    let mut notice = use_signal(|| Option::<Notice>::None);

    // Reload whenever the signed-in user changes.
    let _loader = use_resource(move || async move {
        let state = auth();
        if state.loading {
            return;
        }
        if state.user.is_none() {
            loading.set(false);
            return;
        }
        loading.set(true);
        match api::get_my_card().await {
            Ok(card) => editor.apply(card),
            Err(e) => notice.set(Some(Notice::Error(e.to_string()))),
        }
        loading.set(false);
    });

    if auth().loading {
        return rsx! { LoadingScreen {} };
    }
    if auth().user.is_none() {
        return rsx! {
            div {
                class: "screen screen-center",
                AuthForm {}
            }
        };
    }
    if loading() {
        return rsx! { LoadingScreen { label: "Sincronizando Dados...".to_string() } };
    }

    rsx! {
        CardEditor { editor, notice, on_navigate }
    }
}

#[component]
fn CardEditor(
    editor: Editor,
    notice: Signal<Option<Notice>>,
    on_navigate: EventHandler<String>,
) -> Element {
    let site = use_site_config();
    let mut content = editor.content;
    let mut notice = notice;
    let mut show_premium = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut copied = use_signal(|| false);
    let mut alias_available = use_signal(|| Option::<bool>::None);

    let card = content();
    let profile = card.profile.clone();
    let access = (editor.access)().unwrap_or(AccessStatus::TrialActive {
        days_left: store::TRIAL_DAYS as u32,
    });
    let base_url = site().site.base_url.trim_end_matches('/').to_string();
    let share_url = site().share_url(&profile.alias);
    let has_custom = card.actions.iter().any(|a| a.kind == ActionKind::Custom);
    let taken = store::AliasError::Taken.to_string();
    let alias_problem = store::alias::validate(&profile.alias).err().map(|e| e.to_string());
    let public_path = Route::PublicCard {
        slug: profile.alias.clone(),
    }
    .path();

    let handle_save = move |_| {
        spawn(async move {
            saving.set(true);
            notice.set(None);
            match api::save_my_card(content()).await {
                Ok(card) => {
                    editor.apply(card);
                    notice.set(Some(Notice::Success(
                        "Seu perfil foi atualizado com sucesso!".to_string(),
                    )));
                }
                Err(e) => notice.set(Some(Notice::Error(e.to_string()))),
            }
            saving.set(false);
        });
    };

    let check_alias = move |_| {
        spawn(async move {
            let alias = content().profile.alias;
            if store::alias::validate(&alias).is_err() {
                alias_available.set(None);
                return;
            }
            match api::check_alias(alias).await {
                Ok(available) => alias_available.set(Some(available)),
                Err(e) => tracing::warn!("Alias check failed: {}", e),
            }
        });
    };

    rsx! {
        div {
            class: "dashboard",

            PremiumModal {
                open: show_premium(),
                on_close: move |_| show_premium.set(false),
            }

            header {
                class: "dashboard-header",
                div {
                    class: "dashboard-brand",
                    div { class: "brand-mark", "CP" }
                    AccessBadge { status: access, on_upgrade: move |_| show_premium.set(true) }
                }
                div {
                    class: "dashboard-header-actions",
                    if (editor.saved)() {
                        button {
                            class: "btn btn-outline btn-small",
                            onclick: move |_| on_navigate.call(public_path.clone()),
                            i { class: "fa-solid fa-eye" }
                            " VER"
                        }
                    }
                    LogoutButton {
                        class: "btn btn-danger-link",
                        on_logout: move |_| on_navigate.call(Route::Home.path()),
                    }
                }
            }

            div {
                class: "dashboard-body",

                TrialBanner { status: access, on_upgrade: move |_| show_premium.set(true) }

                {match notice() {
                    Some(Notice::Success(msg)) => rsx! { div { class: "alert alert-success", "{msg}" } },
                    Some(Notice::Error(msg)) => rsx! { div { class: "alert alert-error", "{msg}" } },
                    None => rsx! {},
                }}

                section {
                    class: "panel",
                    h2 { "Endereço Digital" }
                    div {
                        class: "alias-input",
                        span { class: "alias-prefix", "{base_url}/" }
                        input {
                            r#type: "text",
                            placeholder: "seu-nome",
                            value: "{profile.alias}",
                            oninput: move |evt: FormEvent| {
                                alias_available.set(None);
                                content.write().profile.alias = store::alias::sanitize(&evt.value());
                            },
                            onblur: check_alias,
                        }
                        button {
                            class: "btn btn-icon",
                            onclick: move |_| {
                                copy_to_clipboard(&share_url);
                                copied.set(true);
                            },
                            if copied() {
                                i { class: "fa-solid fa-check" }
                            } else {
                                i { class: "fa-regular fa-copy" }
                            }
                        }
                    }
                    if let Some(problem) = alias_problem {
                        p { class: "field-hint field-hint-error", "{problem}" }
                    } else if alias_available() == Some(false) {
                        p { class: "field-hint field-hint-error", "{taken}" }
                    } else if alias_available() == Some(true) {
                        p { class: "field-hint field-hint-ok", "Endereço disponível." }
                    }
                }

                section {
                    class: "panel",
                    h2 { "Aparência do Cartão" }

                    label { "Nome Completo" }
                    input {
                        r#type: "text",
                        value: "{profile.name}",
                        oninput: move |evt: FormEvent| content.write().profile.name = evt.value(),
                    }
                    label { "Especialidade" }
                    input {
                        r#type: "text",
                        value: "{profile.title}",
                        oninput: move |evt: FormEvent| content.write().profile.title = evt.value(),
                    }
                    div {
                        class: "field-row",
                        div {
                            label { "Documento" }
                            input {
                                r#type: "text",
                                placeholder: "CRECI",
                                value: "{profile.document.label}",
                                oninput: move |evt: FormEvent| content.write().profile.document.label = evt.value(),
                            }
                        }
                        div {
                            label { "Número" }
                            input {
                                r#type: "text",
                                value: "{profile.document.value}",
                                oninput: move |evt: FormEvent| content.write().profile.document.value = evt.value(),
                            }
                        }
                    }
                    label { "Biografia" }
                    textarea {
                        rows: "3",
                        value: "{profile.bio}",
                        oninput: move |evt: FormEvent| content.write().profile.bio = evt.value(),
                    }
                    label { "Foto de Perfil (URL)" }
                    input {
                        r#type: "url",
                        value: "{profile.avatar_url}",
                        oninput: move |evt: FormEvent| content.write().profile.avatar_url = evt.value(),
                    }
                    label { "Foto de Fundo (URL)" }
                    input {
                        r#type: "url",
                        value: "{profile.background_url}",
                        oninput: move |evt: FormEvent| content.write().profile.background_url = evt.value(),
                    }
                    label { "Cor do Tema" }
                    input {
                        r#type: "color",
                        value: "{profile.theme_color}",
                        oninput: move |evt: FormEvent| content.write().profile.theme_color = evt.value(),
                    }
                }

                section {
                    class: "panel",
                    h2 { "Contatos Diretos" }
                    for (idx, action) in card.actions.iter().enumerate() {
                        div {
                            key: "{idx}",
                            class: "entry",
                            div { class: "entry-icon", i { class: "{action.icon}" } }
                            if action.kind == ActionKind::Custom {
                                input {
                                    r#type: "text",
                                    placeholder: "Texto do botão",
                                    value: "{action.label}",
                                    oninput: move |evt: FormEvent| {
                                        if let Some(action) = content.write().actions.get_mut(idx) {
                                            action.label = evt.value();
                                        }
                                    },
                                }
                            }
                            input {
                                r#type: "text",
                                placeholder: action_placeholder(action),
                                value: action.input_value(),
                                oninput: move |evt: FormEvent| {
                                    if let Some(action) = content.write().actions.get_mut(idx) {
                                        action.set_input(&evt.value());
                                    }
                                },
                            }
                        }
                    }
                    if !has_custom {
                        button {
                            class: "btn btn-outline btn-small",
                            onclick: move |_| content.write().actions.extend(default_custom_actions()),
                            i { class: "fa-solid fa-plus" }
                            " BOTÕES PERSONALIZADOS"
                        }
                    }
                }

                section {
                    class: "panel",
                    h2 { "Redes Sociais" }
                    for (idx, link) in card.links.iter().enumerate() {
                        div {
                            key: "{idx}",
                            class: "entry",
                            div { class: "entry-icon", i { class: "{link.icon}" } }
                            input {
                                r#type: "text",
                                placeholder: "{link.label}",
                                value: link.input_value(),
                                oninput: move |evt: FormEvent| {
                                    if let Some(link) = content.write().links.get_mut(idx) {
                                        link.set_url(&evt.value());
                                    }
                                },
                            }
                        }
                    }
                }

                section {
                    class: "panel",
                    h2 { "Marketing" }
                    label { "Meta Pixel ID" }
                    input {
                        r#type: "text",
                        value: profile.meta_pixel().unwrap_or_default().to_string(),
                        oninput: move |evt: FormEvent| {
                            content.write().profile.meta_pixel_id = non_empty(evt.value());
                        },
                    }
                    label { "Google Analytics 4 (G-XXXXXXX)" }
                    input {
                        r#type: "text",
                        value: profile.ga4_measurement().unwrap_or_default().to_string(),
                        oninput: move |evt: FormEvent| {
                            content.write().profile.ga4_measurement_id = non_empty(evt.value());
                        },
                    }
                }
            }

            div {
                class: "save-bar",
                button {
                    class: "btn btn-gold btn-block",
                    disabled: saving(),
                    onclick: handle_save,
                    if saving() {
                        i { class: "fa-solid fa-spinner fa-spin" }
                    } else {
                        i { class: "fa-solid fa-cloud-arrow-up" }
                    }
                    " ATUALIZAR PERFIL"
                }
            }
        }
    }
}

fn action_placeholder(action: &QuickAction) -> String {
    match action.kind {
        ActionKind::Custom => "seusite.com.br".to_string(),
        _ => action.label.clone(),
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::models::default_quick_actions;

    #[test]
    fn test_blank_tracking_ids_are_cleared() {
        assert_eq!(non_empty("   ".to_string()), None);
        assert_eq!(non_empty(" G-123 ".to_string()), Some("G-123".to_string()));
    }

    #[test]
    fn test_custom_actions_ask_for_a_url() {
        let custom = &default_custom_actions()[0];
        assert_eq!(action_placeholder(custom), "seusite.com.br");
        let whatsapp = &default_quick_actions()[0];
        assert_eq!(action_placeholder(whatsapp), "WhatsApp");
    }
}
