//! Server configuration from environment variables.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `DATABASE_URL` | Postgres connection string (required). |
//! | `SITE_CONFIG` | Path to the site TOML file, default `cartao.toml`. A missing file means defaults. |
//! | `CHECKOUT_PAYMENT_LINK` | Overrides `[checkout] payment_link` from the file. |
//! | `PREMIUM_WEBHOOK_SECRET` | Bearer token the payment webhook must present. Unset disables the webhook. |

use std::path::PathBuf;
use std::sync::OnceLock;

use store::SiteConfig;

use crate::error::ApiError;

static SITE: OnceLock<SiteConfig> = OnceLock::new();

pub fn database_url() -> Result<String, ApiError> {
    dotenvy::dotenv().ok();
    std::env::var("DATABASE_URL").map_err(|_| ApiError::Config("DATABASE_URL not set".to_string()))
}

pub fn premium_webhook_secret() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var("PREMIUM_WEBHOOK_SECRET")
        .ok()
        .filter(|s| !s.trim().is_empty())
}

fn site_config_path() -> PathBuf {
    std::env::var("SITE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(SiteConfig::filename()))
}

fn parse_site_file(text: Option<&str>) -> Result<SiteConfig, ApiError> {
    match text {
        Some(text) => SiteConfig::from_toml(text).map_err(|e| ApiError::Config(e.to_string())),
        None => Ok(SiteConfig::default()),
    }
}

/// Site file contents (defaults if unreadable) with the environment override
/// applied on top either way.
fn build_site_config(text: Option<&str>, payment_link: Option<String>) -> SiteConfig {
    let config = parse_site_file(text).unwrap_or_else(|e| {
        tracing::warn!("Ignoring the site config file: {}", e);
        SiteConfig::default()
    });
    match payment_link.filter(|l| !l.trim().is_empty()) {
        Some(link) => config.with_payment_link(link),
        None => config,
    }
}

fn load_site_config() -> SiteConfig {
    dotenvy::dotenv().ok();
    let path = site_config_path();
    let text = std::fs::read_to_string(&path).ok();
    let payment_link = std::env::var("CHECKOUT_PAYMENT_LINK").ok();

    let config = build_site_config(text.as_deref(), payment_link);
    tracing::info!("Site config from {}: {}", path.display(), config.site.base_url);
    config
}

/// Process-wide site configuration, read once on first use.
pub fn site_config() -> &'static SiteConfig {
    SITE.get_or_init(load_site_config)
}
