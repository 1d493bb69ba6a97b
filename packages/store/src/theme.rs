//! Accent colour helpers for the public card.
//!
//! Colours and image URLs come from owner-written JSON and end up inside a
//! `style` attribute, so both are checked before they are formatted.

use crate::models::is_safe_link;

/// Accent used when a card's colour is not a `#rrggbb` value.
pub const DEFAULT_THEME_COLOR: &str = "#00E5FF";

/// How far the dark and light accent variants sit from the base colour.
pub const ACCENT_SHIFT: i16 = 40;

pub fn parse_hex(color: &str) -> Option<[u8; 3]> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Shift every channel of a `#rrggbb` colour by `amount`, clamping to 0..=255.
/// Anything that is not a six-digit hex colour comes back unchanged.
pub fn adjust_color(color: &str, amount: i16) -> String {
    let Some(rgb) = parse_hex(color) else {
        return color.to_string();
    };
    let shifted = rgb.map(|c| (i16::from(c) + amount).clamp(0, 255) as u8);
    format!("#{:02x}{:02x}{:02x}", shifted[0], shifted[1], shifted[2])
}

/// CSS custom properties for a card's theme. An invalid colour falls back
/// to [`DEFAULT_THEME_COLOR`].
pub fn theme_css_vars(color: &str) -> String {
    let color = match parse_hex(color.trim()) {
        Some([r, g, b]) => format!("#{r:02x}{g:02x}{b:02x}"),
        None => DEFAULT_THEME_COLOR.to_string(),
    };
    let color = color.as_str();
    format!(
        "--theme-color: {}; --theme-color-dark: {}; --theme-color-light: {};",
        color,
        adjust_color(color, -ACCENT_SHIFT),
        adjust_color(color, ACCENT_SHIFT)
    )
}

/// `url` if it can sit inside `url('...')` without breaking out of it.
pub fn css_image_url(url: &str) -> Option<&str> {
    let url = url.trim();
    let breaks_out = |c: char| matches!(c, '\'' | '"' | '(' | ')' | '\\' | ';') || c.is_control();
    if url.is_empty() || url.contains(breaks_out) || !is_safe_link(url) {
        return None;
    }
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_color() {
        assert_eq!(adjust_color("#D4AF37", -40), "#ac870f");
        assert_eq!(adjust_color("#D4AF37", 40), "#fcd75f");
        assert_eq!(adjust_color("00E5FF", 40), "#28ffff");
    }

    #[test]
    fn test_clamps_channels() {
        assert_eq!(adjust_color("#000000", -40), "#000000");
        assert_eq!(adjust_color("#ffffff", 40), "#ffffff");
    }

    #[test]
    fn test_invalid_colour_unchanged() {
        assert_eq!(adjust_color("gold", 40), "gold");
        assert_eq!(adjust_color("#abc", 40), "#abc");
        assert_eq!(adjust_color("#zzzzzz", 40), "#zzzzzz");
    }

    #[test]
    fn test_css_vars() {
        assert_eq!(
            theme_css_vars("#000000"),
            "--theme-color: #000000; --theme-color-dark: #000000; --theme-color-light: #282828;"
        );
    }

    #[test]
    fn test_css_vars_reject_injected_colour() {
        let vars = theme_css_vars("red; background: url(https://evil.example)");
        assert!(vars.starts_with("--theme-color: #00E5FF;"));
        assert!(!vars.contains("evil"));
        assert!(theme_css_vars(" #D4AF37 ").starts_with("--theme-color: #d4af37;"));
    }

    #[test]
    fn test_css_image_url() {
        assert_eq!(
            css_image_url(" https://images.example/bg.jpg "),
            Some("https://images.example/bg.jpg")
        );
        assert_eq!(css_image_url(""), None);
        assert_eq!(css_image_url("https://x.example/a.jpg'); color: red; ('"), None);
        assert_eq!(css_image_url("https://x.example/a(1).jpg"), None);
        assert_eq!(css_image_url("javascript:alert(1)"), None);
    }
}
