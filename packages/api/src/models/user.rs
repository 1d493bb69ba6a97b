//! # User model for authenticated users
//!
//! [`User`] (server only) is the full `users` row, loaded with
//! [`sqlx::FromRow`]; it carries the Argon2 `password_hash`.
//!
//! [`UserInfo`] is the client-safe projection that crosses the server/client
//! boundary: no hash, no timestamps, and the id as a `String` so it works in
//! WASM.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
}

impl UserInfo {
    /// The part of the e-mail before the `@`, for greetings.
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let user = UserInfo {
            id: "1".to_string(),
            email: "ana.paula@exemplo.com".to_string(),
        };
        assert_eq!(user.display_name(), "ana.paula");
    }
}
