//! This crate contains all shared UI for the workspace.
//!
//! Screens never touch the browser history themselves. Every view that can
//! leave the current screen takes an `on_navigate` handler with the target
//! path, and the platform crate decides how to get there.

use dioxus::prelude::*;

pub mod views;

pub const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

mod auth;
pub use auth::{use_auth, AuthForm, AuthProvider, AuthState, LogoutButton};

mod site;
pub use site::{use_site_config, SiteProvider};

mod access;
pub use access::{AccessBadge, TrialBanner};

mod premium_modal;
pub use premium_modal::PremiumModal;

mod card;
pub use card::CardView;

mod browser;
pub use browser::{copy_to_clipboard, open_external};

/// Full-screen spinner used while a screen loads its data.
#[component]
pub fn LoadingScreen(label: Option<String>) -> Element {
    rsx! {
        div {
            class: "screen screen-center",
            div { class: "spinner" }
            if let Some(label) = label {
                p { class: "loading-label", "{label}" }
            }
        }
    }
}
