use dioxus::prelude::*;
use store::{Route, TRIAL_DAYS};

use crate::use_site_config;

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "fa-solid fa-wand-magic-sparkles",
        "Design Premium",
        "Layouts sofisticados e temas personalizáveis.",
    ),
    (
        "fa-solid fa-share-nodes",
        "Compartilhamento Fácil",
        "Link único para Bio do Instagram, WhatsApp e LinkedIn.",
    ),
    (
        "fa-solid fa-chart-simple",
        "Painel de Controle",
        "Edite suas informações em tempo real sem precisar de código.",
    ),
];

/// Marketing page at `/`.
#[component]
pub fn LandingView(on_navigate: EventHandler<String>) -> Element {
    let site = use_site_config();
    let brand = site().site.name;
    let dashboard = Route::Dashboard.path();
    let demo = Route::PublicCard {
        slug: "exemplo".to_string(),
    }
    .path();

    let go = move |path: String| move |_: MouseEvent| on_navigate.call(path.clone());

    rsx! {
        div {
            class: "landing",

            nav {
                class: "landing-nav",
                div {
                    class: "brand",
                    i { class: "fa-solid fa-address-card" }
                    span { "{brand}" }
                }
                div {
                    class: "landing-nav-actions",
                    button { class: "btn btn-link", onclick: go(dashboard.clone()), "Entrar" }
                    button { class: "btn btn-light", onclick: go(dashboard.clone()), "Testar Grátis" }
                }
            }

            section {
                class: "hero",
                h1 { "Seu Networking, " br {} span { class: "text-gold", "Reinventado." } }
                p {
                    "Crie cartões de visita digitais interativos, elegantes e que convertem conexões em negócios."
                }
                div {
                    class: "hero-actions",
                    button {
                        class: "btn btn-gold btn-large",
                        onclick: go(dashboard.clone()),
                        "Começar Agora "
                        i { class: "fa-solid fa-arrow-right" }
                    }
                    button { class: "btn btn-ghost btn-large", onclick: go(demo), "Ver Exemplo" }
                }
            }

            section {
                class: "features",
                h2 { "Tudo que você precisa" }
                div {
                    class: "feature-grid",
                    for (icon, title, desc) in FEATURES {
                        div {
                            class: "feature",
                            i { class: "{icon}" }
                            h3 { "{title}" }
                            p { "{desc}" }
                        }
                    }
                }
            }

            section {
                class: "pricing",
                h2 { "Preço Simples e Justo" }
                div {
                    class: "pricing-card",
                    p { class: "pricing-kicker", "Licença Vitalícia" }
                    ul {
                        li { "{TRIAL_DAYS} dias de teste grátis" }
                        li { "Cartão personalizado ilimitado" }
                        li { "Link exclusivo permanente" }
                    }
                    button { class: "btn btn-gold btn-block", onclick: go(dashboard), "Criar meu cartão" }
                }
            }

            footer {
                class: "landing-footer",
                "© {brand}. Todos os direitos reservados."
            }
        }
    }
}
