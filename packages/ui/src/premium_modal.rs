use dioxus::prelude::*;

use crate::{open_external, use_site_config};

const BENEFITS: &[&str] = &[
    "Edição ilimitada de informações",
    "Link personalizado exclusivo",
    "Cartão público sem prazo de expiração",
    "Suporte técnico prioritário",
];

/// Lifetime-licence offer. The button leaves the app for the configured
/// payment link; premium is granted later by the payment webhook, never here.
#[component]
pub fn PremiumModal(open: bool, on_close: EventHandler<()>) -> Element {
    let site = use_site_config();
    let mut redirecting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    if !open {
        return rsx! {};
    }

    let brand = site().site.name;
    let handle_checkout = move |_| {
        error.set(None);
        match site().payment_link() {
            Some(link) => {
                redirecting.set(true);
                open_external(link);
            }
            None => {
                error.set(Some("Link de pagamento não configurado.".to_string()));
            }
        }
    };

    rsx! {
        div {
            class: "modal",
            div {
                class: "modal-backdrop",
                onclick: move |_| on_close.call(()),
            }
            div {
                class: "modal-panel",

                div {
                    class: "modal-header",
                    i { class: "fa-solid fa-crown" }
                    h2 { "{brand}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        i { class: "fa-solid fa-times" }
                    }
                }

                div {
                    class: "modal-body",
                    p { class: "modal-kicker", "ACESSO VITALÍCIO" }
                    p { class: "modal-note", "Pagamento Único • Sem mensalidades" }
                    ul {
                        class: "benefits",
                        for item in BENEFITS {
                            li {
                                i { class: "fa-solid fa-check" }
                                span { "{item}" }
                            }
                        }
                    }
                    if let Some(err) = error() {
                        div { class: "alert alert-error", "{err}" }
                    }
                }

                div {
                    class: "modal-footer",
                    button {
                        class: "btn btn-gold btn-block",
                        disabled: redirecting(),
                        onclick: handle_checkout,
                        if redirecting() {
                            i { class: "fa-solid fa-circle-notch fa-spin" }
                            " Redirecionando..."
                        } else {
                            "Liberar Acesso Agora "
                            i { class: "fa-solid fa-lock" }
                        }
                    }
                }
            }
        }
    }
}
