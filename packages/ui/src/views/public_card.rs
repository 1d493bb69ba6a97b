use dioxus::prelude::*;
use store::models::CardContent;
use store::{PublicCard, Route, TRIAL_DAYS};

use crate::{CardView, LoadingScreen};

/// Public page at `/<slug>`.
///
/// Mount with `key: "{slug}"` so a new slug starts a fresh fetch.
#[component]
pub fn PublicCardView(slug: String, on_navigate: EventHandler<String>) -> Element {
    let fetch_slug = slug.clone();
    let card = use_resource(move || {
        let slug = fetch_slug.clone();
        async move {
            // Demo slugs never hit the server.
            if store::alias::is_demo(&slug) {
                return Ok(PublicCard::Demo {
                    content: CardContent::demo(),
                });
            }
            api::get_public_card(slug.clone())
                .await
                .inspect_err(|e| tracing::warn!("Failed to load card /{}: {}", slug, e))
        }
    });

    let home = Route::Home.path();
    let demo = Route::PublicCard {
        slug: "exemplo".to_string(),
    }
    .path();

    let state = card.read().clone();
    match state {
        None => rsx! { LoadingScreen {} },
        Some(Ok(PublicCard::Demo { content })) => rsx! {
            div { class: "demo-ribbon", "Modo de Demonstração" }
            button {
                class: "btn btn-ghost back-home",
                onclick: move |_| on_navigate.call(home.clone()),
                i { class: "fa-solid fa-arrow-left" }
                " Voltar ao Início"
            }
            CardView { content, demo: true }
        },
        Some(Ok(PublicCard::Active { content, .. })) => rsx! {
            CardView { content }
            a {
                class: "made-with",
                href: "{home}",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    on_navigate.call(home.clone());
                },
                "Criado com Cartão Digital Pro"
            }
        },
        Some(Ok(PublicCard::Expired)) => rsx! {
            div {
                class: "screen screen-center",
                div {
                    class: "status-card status-failure",
                    div { class: "status-icon", i { class: "fa-solid fa-lock" } }
                    h1 { class: "status-title", "Cartão Expirado" }
                    p {
                        class: "status-description",
                        "O período de teste gratuito deste cartão encerrou. Se você é o dono deste cartão, acesse o painel para regularizar."
                    }
                    button {
                        class: "btn btn-light btn-block",
                        onclick: move |_| on_navigate.call(Route::Dashboard.path()),
                        "Acessar Painel"
                    }
                    p { class: "status-footnote", "Este perfil foi criado há mais de {TRIAL_DAYS} dias." }
                }
            }
        },
        Some(Ok(PublicCard::NotFound)) | Some(Err(_)) => {
            rsx! {
                div {
                    class: "screen screen-center",
                    i { class: "fa-solid fa-ghost not-found-icon" }
                    h1 { "Cartão não encontrado" }
                    p {
                        "O endereço "
                        strong { "/{slug}" }
                        " não existe ou foi desativado."
                    }
                    div {
                        class: "hero-actions",
                        button {
                            class: "btn btn-gold",
                            onclick: move |_| on_navigate.call(home.clone()),
                            "Criar meu cartão"
                        }
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| on_navigate.call(demo.clone()),
                            "Ver Exemplo"
                        }
                    }
                }
            }
        }
    }
}
