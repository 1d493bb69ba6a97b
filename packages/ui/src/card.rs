//! The business card itself, shared by the public page and the demo.

use dioxus::prelude::*;
use store::models::{is_safe_link, ActionKind, CardContent, ProfileData, QuickAction, SocialLink};
use store::theme::{css_image_url, theme_css_vars};
use store::vcard::{vcard_data_uri, vcard_filename};

/// Render a card. In demo mode every link is inert and the placeholder
/// entries stay visible so the layout is complete.
#[component]
pub fn CardView(content: CardContent, #[props(default)] demo: bool) -> Element {
    let profile = &content.profile;
    let theme = theme_css_vars(&profile.theme_color);
    let background = css_image_url(&profile.background_url).map(str::to_string);

    let actions: Vec<QuickAction> = if demo {
        content.actions.clone()
    } else {
        content.visible_actions().cloned().collect()
    };
    let links: Vec<SocialLink> = if demo {
        content.links.clone()
    } else {
        content.visible_links().cloned().collect()
    };
    let target = link_target(demo);

    rsx! {
        div {
            class: "card-page",
            style: "{theme}",

            if let Some(background) = background {
                div {
                    class: "card-background",
                    style: "background-image: url('{background}');",
                }
            }

            div {
                class: "card",
                ProfileHeader { profile: profile.clone() }

                div {
                    class: "card-actions",
                    for (index, action) in actions.into_iter().enumerate() {
                        ActionButton { key: "{index}", action, demo }
                    }
                }

                SaveContactButton { profile: profile.clone(), demo }

                footer {
                    class: "card-footer",
                    div {
                        class: "card-links",
                        for (index, link) in links.into_iter().enumerate() {
                            a {
                                key: "{index}",
                                href: link_href(&link.url, demo),
                                target,
                                rel: "noopener noreferrer",
                                aria_label: "{link.label}",
                                i { class: "{link.icon}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Demo links and anything with a scheme other than http(s), mailto or tel
/// become `#`.
fn link_href(url: &str, demo: bool) -> String {
    if demo || !is_safe_link(url) {
        "#".to_string()
    } else {
        url.trim().to_string()
    }
}

fn link_target(demo: bool) -> &'static str {
    if demo {
        "_self"
    } else {
        "_blank"
    }
}

#[component]
fn ProfileHeader(profile: ProfileData) -> Element {
    let avatar = profile.avatar_url.trim().to_string();
    let document = profile.document.clone();

    rsx! {
        header {
            class: "card-header",
            if !avatar.is_empty() {
                img { class: "card-avatar", src: "{avatar}", alt: "{profile.name}" }
            } else {
                div {
                    class: "card-avatar card-avatar-empty",
                    i { class: "fa-solid fa-user" }
                }
            }
            h1 { class: "card-name", "{profile.name}" }
            if !profile.title.trim().is_empty() {
                p { class: "card-title", "{profile.title}" }
            }
            if !document.value.trim().is_empty() {
                p { class: "card-document", "{document.label} {document.value}" }
            }
            if !profile.bio.trim().is_empty() {
                p { class: "card-bio", "{profile.bio}" }
            }
        }
    }
}

#[component]
fn ActionButton(action: QuickAction, demo: bool) -> Element {
    let class = if action.kind == ActionKind::Whatsapp {
        "action action-whatsapp"
    } else {
        "action"
    };
    let href = link_href(&action.url, demo);
    let target = link_target(demo);

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            target,
            rel: "noopener noreferrer",
            div { class: "action-icon", i { class: "{action.icon}" } }
            span { class: "action-label", "{action.label}" }
        }
    }
}

#[component]
fn SaveContactButton(profile: ProfileData, demo: bool) -> Element {
    let href = if demo { "#".to_string() } else { vcard_data_uri(&profile) };
    let filename = vcard_filename(&profile);

    rsx! {
        a {
            class: "btn btn-gold btn-block save-contact",
            href: "{href}",
            download: "{filename}",
            i { class: "fa-solid fa-user-plus" }
            " SALVAR CONTATO"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_href_blocks_scripts() {
        assert_eq!(link_href("https://wa.me/5511", false), "https://wa.me/5511");
        assert_eq!(link_href("https://wa.me/5511", true), "#");
        assert_eq!(link_href("javascript:alert(document.cookie)", false), "#");
        assert_eq!(link_href("  JAVASCRIPT:alert(1)", false), "#");
    }
}
