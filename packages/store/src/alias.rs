//! Alias (public slug) rules.

use thiserror::Error;

use crate::route::{resolve, Route};

pub const MIN_ALIAS_LEN: usize = 3;

/// Slugs that open something other than a user's card.
pub const RESERVED_ALIASES: &[&str] = &["dashboard", "checkout", "index", "demo", "exemplo"];

/// Slugs that render the sample card instead of a stored one.
pub const DEMO_ALIASES: &[&str] = &["demo", "exemplo"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasError {
    #[error("O link personalizado deve ter pelo menos 3 caracteres.")]
    TooShort,
    #[error("O endereço /{0} é reservado.")]
    Reserved(String),
    #[error("Este endereço já está em uso por outro usuário.")]
    Taken,
}

/// Lowercase and drop everything outside `[a-z0-9-]`.
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

pub fn is_demo(slug: &str) -> bool {
    DEMO_ALIASES.contains(&slug)
}

/// Check a sanitised alias. Does not consult the store; availability is
/// decided by [`crate::Cards::save`].
pub fn validate(alias: &str) -> Result<(), AliasError> {
    if alias.chars().count() < MIN_ALIAS_LEN {
        return Err(AliasError::TooShort);
    }
    if RESERVED_ALIASES.contains(&alias) {
        return Err(AliasError::Reserved(alias.to_string()));
    }
    match resolve(&format!("/{alias}")) {
        Route::PublicCard { slug } if slug == alias => Ok(()),
        _ => Err(AliasError::Reserved(alias.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("Mariana Xavier"), "marianaxavier");
        assert_eq!(sanitize("joão-silva_2"), "joo-silva2");
        assert_eq!(sanitize("ANA.PAULA/"), "anapaula");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_validate_length() {
        assert_eq!(validate("ab"), Err(AliasError::TooShort));
        assert_eq!(validate(""), Err(AliasError::TooShort));
        assert_eq!(validate("abc"), Ok(()));
    }

    #[test]
    fn test_reserved() {
        assert_eq!(
            validate("dashboard"),
            Err(AliasError::Reserved("dashboard".to_string()))
        );
        assert!(validate("exemplo").is_err());
        assert!(validate("dashboards").is_ok());
    }

    #[test]
    fn test_valid_alias_resolves_to_itself() {
        for alias in ["joao", "ana-paula", "loja-123"] {
            assert_eq!(validate(alias), Ok(()));
            assert_eq!(
                resolve(&format!("/{alias}")),
                Route::PublicCard {
                    slug: alias.to_string()
                }
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AliasError::TooShort.to_string(),
            "O link personalizado deve ter pelo menos 3 caracteres."
        );
        assert_eq!(
            AliasError::Reserved("demo".to_string()).to_string(),
            "O endereço /demo é reservado."
        );
    }

    #[test]
    fn test_demo_slugs() {
        assert!(is_demo("exemplo"));
        assert!(is_demo("demo"));
        assert!(!is_demo("mariana"));
    }
}
