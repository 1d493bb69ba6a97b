//! Trial and premium indicators for the dashboard.

use api::AccessStatus;
use dioxus::prelude::*;

fn badge_style(status: AccessStatus) -> (&'static str, &'static str) {
    match status {
        AccessStatus::Premium => ("badge badge-premium", "fa-solid fa-crown"),
        AccessStatus::TrialActive { .. } => ("badge badge-trial", "fa-solid fa-clock"),
        AccessStatus::TrialExpired => ("badge badge-expired", "fa-solid fa-lock"),
    }
}

/// Header pill showing the access status. Clicking it opens the upgrade flow
/// unless the card is already premium.
#[component]
pub fn AccessBadge(status: AccessStatus, on_upgrade: EventHandler<()>) -> Element {
    let (class, icon) = badge_style(status);
    let label = status.label();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                if !status.is_premium() {
                    on_upgrade.call(());
                }
            },
            i { class: "{icon}" }
            span { "{label}" }
        }
    }
}

#[component]
pub fn TrialBanner(status: AccessStatus, on_upgrade: EventHandler<()>) -> Element {
    let (title, detail) = match status {
        AccessStatus::Premium => return rsx! {},
        AccessStatus::TrialActive { days_left } => {
            ("Teste Grátis".to_string(), format!("Expira em {days_left} dias"))
        }
        AccessStatus::TrialExpired => (
            "Teste Expirado".to_string(),
            "Seu cartão público está fora do ar até a ativação.".to_string(),
        ),
    };
    let class = if status.is_unlocked() {
        "trial-banner"
    } else {
        "trial-banner trial-banner-expired"
    };

    rsx! {
        div {
            class: "{class}",
            div {
                class: "trial-banner-text",
                i { class: "fa-solid fa-clock-rotate-left" }
                div {
                    p { class: "trial-banner-title", "{title}" }
                    p { class: "trial-banner-detail", "{detail}" }
                }
            }
            button {
                class: "btn btn-gold btn-small",
                onclick: move |_| on_upgrade.call(()),
                "UPGRADE"
            }
        }
    }
}
