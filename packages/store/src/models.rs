//! # Card content models
//!
//! The JSON document stored in the `content` column of a profile row, and the
//! defaults a new card starts from. Field names serialise in camelCase so the
//! stored documents stay compatible with cards written by earlier clients.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`ProfileData`] | Header of the card: alias, name, title, bio, images, theme colour, trial fields and tracking IDs. |
//! | [`QuickAction`] | A large button on the card (WhatsApp, map, e-mail, website or a custom link). |
//! | [`SocialLink`] | An icon link in the card footer. |
//! | [`CardContent`] | The three lists above, as persisted. |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::theme::DEFAULT_THEME_COLOR;

/// Country prefix applied to WhatsApp numbers entered without one.
pub const WHATSAPP_COUNTRY_CODE: &str = "55";

const WHATSAPP_PREFIX: &str = "https://wa.me/";
const MAILTO_PREFIX: &str = "mailto:";
const MAPS_PREFIX: &str = "https://maps.google.com/?q=";

/// Schemes a card link may use. Anything else (`javascript:`, `data:`, ...)
/// never reaches an `href`.
const LINK_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

/// Lower-cased scheme of `url`, if it has one. Tabs, newlines and other
/// control characters are dropped first, as browsers do when parsing `href`.
fn link_scheme(url: &str) -> Option<String> {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    let end = cleaned.find([':', '/', '?', '#'])?;
    let (candidate, rest) = cleaned.split_at(end);
    if !rest.starts_with(':') {
        return None;
    }
    // `exemplo.com:8080/...` is a host and port, not a scheme.
    let host_like = candidate.contains('.') || candidate.eq_ignore_ascii_case("localhost");
    if host_like && rest[1..].starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    Some(candidate.to_ascii_lowercase())
}

/// True when `url` is safe to render as a link on a public card.
pub fn is_safe_link(url: &str) -> bool {
    match link_scheme(url.trim()) {
        Some(scheme) => LINK_SCHEMES.contains(&scheme.as_str()),
        None => true,
    }
}

/// Normalise an owner-typed web address: a bare host gets `https://`, a
/// link with a forbidden scheme becomes empty.
pub fn web_link(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    match link_scheme(raw) {
        None => format!("https://{raw}"),
        Some(scheme) if LINK_SCHEMES.contains(&scheme.as_str()) => raw.to_string(),
        Some(_) => String::new(),
    }
}

/// Professional registration shown under the title, e.g. `CRECI 012345`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub document: DocumentInfo,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub background_url: String,
    #[serde(default = "default_theme_color")]
    pub theme_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_pixel_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ga4_measurement_id: Option<String>,
}

fn default_theme_color() -> String {
    DEFAULT_THEME_COLOR.to_string()
}

impl Default for ProfileData {
    fn default() -> Self {
        Self::blank()
    }
}

impl ProfileData {
    /// An empty card, as shown to a user who has never saved.
    pub fn blank() -> Self {
        Self {
            alias: String::new(),
            name: String::new(),
            title: String::new(),
            document: DocumentInfo::default(),
            bio: String::new(),
            avatar_url: String::new(),
            background_url: String::new(),
            theme_color: default_theme_color(),
            created_at: None,
            is_premium: Some(false),
            meta_pixel_id: None,
            ga4_measurement_id: None,
        }
    }

    /// The sample card served on the demo slugs and the landing page.
    pub fn demo() -> Self {
        Self {
            alias: "marianaxavier".to_string(),
            name: "Mariana Xavier".to_string(),
            title: "Estrategista Imobiliária".to_string(),
            document: DocumentInfo {
                label: "CRECI".to_string(),
                value: "012345456".to_string(),
            },
            bio: "Especialista em alto padrão com foco em ROI imobiliário. Minha missão é transformar seu investimento em patrimônio sólido.".to_string(),
            avatar_url: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?q=80&w=256&h=256&auto=format&fit=crop".to_string(),
            background_url: "https://images.unsplash.com/photo-1613490493576-7fde63acd811?q=80&w=1920&auto=format&fit=crop".to_string(),
            theme_color: "#D4AF37".to_string(),
            created_at: None,
            is_premium: Some(false),
            meta_pixel_id: None,
            ga4_measurement_id: None,
        }
    }

    pub fn is_premium(&self) -> bool {
        self.is_premium.unwrap_or(false)
    }

    /// Creation instant, substituting `fallback` when the record has none.
    pub fn created_at_or(&self, fallback: DateTime<Utc>) -> DateTime<Utc> {
        self.created_at.unwrap_or(fallback)
    }

    /// Tracking IDs with blank values dropped.
    pub fn meta_pixel(&self) -> Option<&str> {
        non_blank(self.meta_pixel_id.as_deref())
    }

    pub fn ga4_measurement(&self) -> Option<&str> {
        non_blank(self.ga4_measurement_id.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Whatsapp,
    Map,
    Email,
    Website,
    Custom,
}

impl ActionKind {
    /// Turn what the owner typed into the link stored on the button.
    pub fn build_url(self, raw: &str) -> String {
        let raw = raw.trim();
        if raw.is_empty() {
            return String::new();
        }
        match self {
            ActionKind::Whatsapp => {
                let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
                format!("{WHATSAPP_PREFIX}{WHATSAPP_COUNTRY_CODE}{digits}")
            }
            ActionKind::Email => format!("{MAILTO_PREFIX}{raw}"),
            ActionKind::Map => format!("{MAPS_PREFIX}{}", urlencoding::encode(raw)),
            ActionKind::Website | ActionKind::Custom => web_link(raw),
        }
    }

    /// Inverse of [`build_url`](Self::build_url), for showing a stored link in an input.
    pub fn display_value(self, url: &str) -> String {
        match self {
            ActionKind::Whatsapp => url
                .strip_prefix(WHATSAPP_PREFIX)
                .map(|rest| rest.strip_prefix(WHATSAPP_COUNTRY_CODE).unwrap_or(rest))
                .unwrap_or(url)
                .to_string(),
            ActionKind::Email => url.strip_prefix(MAILTO_PREFIX).unwrap_or(url).to_string(),
            ActionKind::Map => match url.strip_prefix(MAPS_PREFIX) {
                Some(query) => urlencoding::decode(query)
                    .map(|q| q.into_owned())
                    .unwrap_or_else(|_| query.to_string()),
                None => url.to_string(),
            },
            ActionKind::Website | ActionKind::Custom => web_input(url),
        }
    }
}

/// What the owner sees in a web address input: the stored link minus the
/// `https://` that [`web_link`] adds.
fn web_input(url: &str) -> String {
    url.strip_prefix("https://").unwrap_or(url).to_string()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    pub icon: String,
    pub label: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ActionKind,
}

impl QuickAction {
    fn new(icon: &str, label: &str, kind: ActionKind) -> Self {
        Self {
            icon: icon.to_string(),
            label: label.to_string(),
            url: String::new(),
            kind,
        }
    }

    /// Store a raw owner input as this button's link.
    pub fn set_input(&mut self, raw: &str) {
        self.url = self.kind.build_url(raw);
    }

    pub fn input_value(&self) -> String {
        self.kind.display_value(&self.url)
    }

    /// Has a link, and the link is one a visitor may follow.
    pub fn is_visible(&self) -> bool {
        !self.url.trim().is_empty() && is_safe_link(&self.url)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: String,
    #[serde(default)]
    pub url: String,
    pub label: String,
}

impl SocialLink {
    fn new(icon: &str, label: &str) -> Self {
        Self {
            icon: icon.to_string(),
            url: String::new(),
            label: label.to_string(),
        }
    }

    pub fn set_url(&mut self, raw: &str) {
        self.url = web_link(raw);
    }

    pub fn input_value(&self) -> String {
        web_input(&self.url)
    }

    pub fn is_visible(&self) -> bool {
        !self.url.trim().is_empty() && is_safe_link(&self.url)
    }
}

pub fn default_quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction::new("fa-brands fa-whatsapp", "WhatsApp", ActionKind::Whatsapp),
        QuickAction::new("fa-solid fa-location-dot", "Localização", ActionKind::Map),
        QuickAction::new("fa-solid fa-envelope", "E-mail", ActionKind::Email),
        QuickAction::new("fa-solid fa-globe", "Website", ActionKind::Website),
    ]
}

pub fn default_custom_actions() -> Vec<QuickAction> {
    vec![
        QuickAction::new("fa-solid fa-star", "", ActionKind::Custom),
        QuickAction::new("fa-solid fa-star", "", ActionKind::Custom),
    ]
}

pub fn default_social_links() -> Vec<SocialLink> {
    vec![
        SocialLink::new("fa-brands fa-instagram", "Instagram"),
        SocialLink::new("fa-brands fa-linkedin-in", "LinkedIn"),
        SocialLink::new("fa-brands fa-x-twitter", "X (Twitter)"),
        SocialLink::new("fa-brands fa-facebook-f", "Facebook"),
        SocialLink::new("fa-brands fa-tiktok", "TikTok"),
        SocialLink::new("fa-brands fa-youtube", "YouTube"),
    ]
}

/// Everything stored for one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardContent {
    #[serde(default)]
    pub profile: ProfileData,
    #[serde(default = "default_quick_actions")]
    pub actions: Vec<QuickAction>,
    #[serde(default = "default_social_links")]
    pub links: Vec<SocialLink>,
}

impl Default for CardContent {
    fn default() -> Self {
        Self::blank()
    }
}

impl CardContent {
    pub fn blank() -> Self {
        Self {
            profile: ProfileData::blank(),
            actions: default_quick_actions(),
            links: default_social_links(),
        }
    }

    pub fn demo() -> Self {
        Self {
            profile: ProfileData::demo(),
            actions: default_quick_actions(),
            links: default_social_links(),
        }
    }

    /// Fill the trial fields older records may lack: premium defaults to
    /// false, the creation time to the row's own timestamp or `now`.
    pub fn normalize(&mut self, row_created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) {
        if self.profile.is_premium.is_none() {
            self.profile.is_premium = Some(false);
        }
        if self.profile.created_at.is_none() {
            self.profile.created_at = Some(row_created_at.unwrap_or(now));
        }
    }

    /// Blank out every stored link a visitor must not follow.
    pub fn drop_unsafe_links(&mut self) {
        let urls = self
            .actions
            .iter_mut()
            .map(|a| &mut a.url)
            .chain(self.links.iter_mut().map(|l| &mut l.url));
        for url in urls {
            if !is_safe_link(url) {
                url.clear();
            }
        }
    }

    pub fn visible_actions(&self) -> impl Iterator<Item = &QuickAction> {
        self.actions.iter().filter(|a| a.is_visible())
    }

    pub fn visible_links(&self) -> impl Iterator<Item = &SocialLink> {
        self.links.iter().filter(|l| l.is_visible())
    }
}
