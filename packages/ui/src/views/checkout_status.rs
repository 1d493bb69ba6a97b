use dioxus::prelude::*;
use store::{CheckoutKind, Route};

struct StatusCopy {
    icon: &'static str,
    tone: &'static str,
    title: &'static str,
    description: &'static str,
    button: &'static str,
    target: Route,
}

fn status_copy(kind: CheckoutKind) -> StatusCopy {
    match kind {
        CheckoutKind::Success => StatusCopy {
            icon: "fa-solid fa-circle-check",
            tone: "status-success",
            title: "Pagamento Aprovado!",
            description: "Assim que a confirmação do pagamento chegar, sua conta Premium Vitalícia é ativada automaticamente.",
            button: "IR PARA MEU PAINEL",
            target: Route::Dashboard,
        },
        CheckoutKind::Failure => StatusCopy {
            icon: "fa-solid fa-circle-xmark",
            tone: "status-failure",
            title: "Ops! Algo deu errado",
            description: "Não conseguimos processar seu pagamento. Verifique os dados ou tente outro método.",
            button: "TENTAR NOVAMENTE",
            target: Route::Dashboard,
        },
        CheckoutKind::Pending => StatusCopy {
            icon: "fa-solid fa-hourglass-half",
            tone: "status-pending",
            title: "Pagamento em Análise",
            description: "Estamos aguardando a confirmação do seu pagamento (PIX ou Boleto podem levar alguns minutos).",
            button: "VOLTAR AO INÍCIO",
            target: Route::Home,
        },
    }
}

/// Landing screen for the payment provider's return URLs.
///
/// Purely informational: reaching `/checkout/success` does not unlock
/// anything.
#[component]
pub fn CheckoutStatusView(kind: CheckoutKind, on_navigate: EventHandler<String>) -> Element {
    let copy = status_copy(kind);
    let target = copy.target.path();

    rsx! {
        div {
            class: "screen screen-center",
            div {
                class: "status-card {copy.tone}",
                div { class: "status-icon", i { class: "{copy.icon}" } }
                h1 { class: "status-title", "{copy.title}" }
                p { class: "status-description", "{copy.description}" }
                button {
                    class: "btn btn-gold btn-block",
                    onclick: move |_| on_navigate.call(target.clone()),
                    "{copy.button}"
                }
            }
        }
    }
}
