//! Row type for the `profiles` table.

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use store::{CardContent, ProfileRecord};
use uuid::Uuid;

/// One row of `profiles`: the owning user's id, the unique alias and the card
/// document as JSONB.
#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub alias: String,
    pub content: Json<CardContent>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileRow {
    pub fn into_record(self) -> ProfileRecord {
        ProfileRecord {
            user_id: self.id.to_string(),
            alias: self.alias,
            content: self.content.0,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
