//! Server-side error type.
//!
//! Every server function works in terms of [`ApiError`] internally and hands it
//! to the client as a [`ServerFnError`] carrying the display message, so the
//! messages below are what users see.

use dioxus::prelude::ServerFnError;
use store::{AliasError, SaveError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Faça login para continuar.")]
    Unauthenticated,
    #[error("E-mail ou senha incorretos.")]
    InvalidCredentials,
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Alias(#[from] AliasError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
    #[error("password hashing failed: {0}")]
    Password(String),
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<SaveError> for ApiError {
    fn from(e: SaveError) -> Self {
        match e {
            SaveError::Alias(alias) => ApiError::Alias(alias),
            SaveError::Store(source) => match source.downcast::<sqlx::Error>() {
                // Two users racing for the same alias trip the unique index.
                Ok(db) if is_unique_violation(&db) => ApiError::Alias(AliasError::Taken),
                Ok(db) => ApiError::Database(*db),
                Err(other) => ApiError::Validation(other.to_string()),
            },
        }
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

impl From<ApiError> for ServerFnError {
    fn from(e: ApiError) -> Self {
        ServerFnError::new(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_errors_keep_their_message() {
        let err: ApiError = SaveError::Alias(AliasError::TooShort).into();
        assert_eq!(
            err.to_string(),
            "O link personalizado deve ter pelo menos 3 caracteres."
        );
    }

    #[test]
    fn test_store_errors_become_database_errors() {
        let save = SaveError::Store(Box::new(sqlx::Error::RowNotFound));
        let err: ApiError = save.into();
        assert!(matches!(err, ApiError::Database(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn test_server_fn_error_message() {
        let err: ServerFnError = ApiError::Unauthenticated.into();
        assert!(err.to_string().contains("Faça login"));
    }
}
