//! # Site configuration: `cartao.toml`
//!
//! Deployment-level settings read by the server at start-up (path from the
//! `SITE_CONFIG` environment variable, default [`SiteConfig::filename`]).
//!
//! ```toml
//! [site]
//! name = "Cartão Digital Pro"
//! base_url = "https://analisecardpro.com.br"
//!
//! [checkout]
//! payment_link = ""       # empty disables the upgrade button
//! ```
//!
//! Every field has a default, so a missing or empty file is equivalent to
//! [`SiteConfig::default`].

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub checkout: CheckoutSection,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteSection {
    /// Brand shown in page titles and the card footer.
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Public origin used to build share links, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_site_name() -> String {
    "Cartão Digital Pro".to_string()
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSection {
    /// Hosted payment page for the lifetime licence.
    #[serde(default)]
    pub payment_link: String,
}

impl SiteConfig {
    pub fn filename() -> &'static str {
        "cartao.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Builder method to set the payment link.
    pub fn with_payment_link(mut self, link: impl Into<String>) -> Self {
        self.checkout.payment_link = link.into();
        self
    }

    /// Public URL of a card.
    pub fn share_url(&self, alias: &str) -> String {
        format!("{}/{}", self.site.base_url.trim_end_matches('/'), alias)
    }

    /// The payment link, if one is configured.
    pub fn payment_link(&self) -> Option<&str> {
        let link = self.checkout.payment_link.trim();
        (!link.is_empty()).then_some(link)
    }
}
