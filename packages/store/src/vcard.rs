//! vCard 3.0 export for the "save to contacts" button.

use crate::models::ProfileData;

/// Escape a text value per RFC 2426 §4.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Render the card header as a vCard.
///
/// `N` is the name split on whitespace and reversed, so `Mariana Xavier`
/// becomes `Xavier;Mariana`.
pub fn to_vcard(profile: &ProfileData) -> String {
    let structured: Vec<String> = profile
        .name
        .split_whitespace()
        .rev()
        .map(escape)
        .collect();

    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{}", escape(profile.name.trim())),
        format!("N:{}", structured.join(";")),
    ];
    if !profile.title.trim().is_empty() {
        lines.push(format!("TITLE:{}", escape(profile.title.trim())));
    }
    if !profile.bio.trim().is_empty() {
        lines.push(format!("NOTE:{}", escape(profile.bio.trim())));
    }
    if !profile.avatar_url.trim().is_empty() {
        lines.push(format!("PHOTO;VALUE=URI:{}", profile.avatar_url.trim()));
    }
    lines.push("END:VCARD".to_string());

    let mut out = lines.join("\r\n");
    out.push_str("\r\n");
    out
}

/// Download name for the vCard, e.g. `Mariana_Xavier.vcf`.
pub fn vcard_filename(profile: &ProfileData) -> String {
    let name = profile.name.trim();
    if name.is_empty() {
        return "contato.vcf".to_string();
    }
    format!("{}.vcf", name.replace(' ', "_"))
}

/// `data:` URI that downloads the vCard when used as a link target.
pub fn vcard_data_uri(profile: &ProfileData) -> String {
    format!(
        "data:text/vcard;charset=utf-8,{}",
        urlencoding::encode(&to_vcard(profile))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_vcard() {
        let mut profile = ProfileData::demo();
        profile.avatar_url.clear();
        profile.bio = "Alto padrão; ROI".to_string();

        let card = to_vcard(&profile);
        assert_eq!(
            card,
            "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Mariana Xavier\r\nN:Xavier;Mariana\r\nTITLE:Estrategista Imobiliária\r\nNOTE:Alto padrão\\; ROI\r\nEND:VCARD\r\n"
        );
    }

    #[test]
    fn test_multiline_bio_is_escaped() {
        let mut profile = ProfileData::blank();
        profile.name = "Ana".to_string();
        profile.bio = "linha 1\r\nlinha 2".to_string();
        let card = to_vcard(&profile);
        assert!(card.contains("NOTE:linha 1\\nlinha 2\r\n"));
        assert!(!card.contains("TITLE:"));
    }

    #[test]
    fn test_data_uri_is_percent_encoded() {
        let mut profile = ProfileData::blank();
        profile.name = "Ana".to_string();
        assert_eq!(
            vcard_data_uri(&profile),
            "data:text/vcard;charset=utf-8,BEGIN%3AVCARD%0D%0AVERSION%3A3.0%0D%0AFN%3AAna%0D%0AN%3AAna%0D%0AEND%3AVCARD%0D%0A"
        );
    }

    #[test]
    fn test_filename() {
        assert_eq!(vcard_filename(&ProfileData::demo()), "Mariana_Xavier.vcf");
        assert_eq!(vcard_filename(&ProfileData::blank()), "contato.vcf");
    }
}
