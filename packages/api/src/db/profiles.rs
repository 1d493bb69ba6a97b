//! Postgres-backed [`ProfileStore`].
//!
//! Lookups by a user id that is not a UUID find nothing rather than fail:
//! no row can have such an id.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use store::{ProfileRecord, ProfileStore};
use uuid::Uuid;

use crate::models::ProfileRow;

#[derive(Clone, Copy, Debug)]
pub struct PgProfileStore {
    pool: &'static PgPool,
}

impl PgProfileStore {
    pub fn new(pool: &'static PgPool) -> Self {
        Self { pool }
    }
}

fn parse_user_id(user_id: &str) -> Result<Uuid, sqlx::Error> {
    Uuid::parse_str(user_id).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

impl ProfileStore for PgProfileStore {
    type Error = sqlx::Error;

    async fn get_by_user(&self, user_id: &str) -> Result<Option<ProfileRecord>, sqlx::Error> {
        let Ok(id) = parse_user_id(user_id) else {
            return Ok(None);
        };
        let row: Option<ProfileRow> = sqlx::query_as("SELECT * FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(row.map(ProfileRow::into_record))
    }

    async fn get_by_alias(&self, alias: &str) -> Result<Option<ProfileRecord>, sqlx::Error> {
        let row: Option<ProfileRow> = sqlx::query_as("SELECT * FROM profiles WHERE alias = $1")
            .bind(alias)
            .fetch_optional(self.pool)
            .await?;
        Ok(row.map(ProfileRow::into_record))
    }

    async fn alias_owners(&self, alias: &str) -> Result<Vec<String>, sqlx::Error> {
        let ids: Vec<(Uuid,)> = sqlx::query_as("SELECT id FROM profiles WHERE alias = $1")
            .bind(alias)
            .fetch_all(self.pool)
            .await?;
        Ok(ids.into_iter().map(|(id,)| id.to_string()).collect())
    }

    async fn upsert(&self, record: &ProfileRecord) -> Result<(), sqlx::Error> {
        let id = parse_user_id(&record.user_id)?;
        sqlx::query(
            "INSERT INTO profiles (id, alias, content, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (id) DO UPDATE SET
                alias = EXCLUDED.alias,
                content = jsonb_set(
                    EXCLUDED.content,
                    '{profile,isPremium}',
                    COALESCE(profiles.content->'profile'->'isPremium', 'false'::jsonb)
                ),
                updated_at = EXCLUDED.updated_at",
        )
        .bind(id)
        .bind(&record.alias)
        .bind(sqlx::types::Json(&record.content))
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(self.pool)
        .await?;
        Ok(())
    }

    async fn set_premium(
        &self,
        user_id: &str,
        premium: bool,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, sqlx::Error> {
        let Ok(id) = parse_user_id(user_id) else {
            return Ok(false);
        };
        let result = sqlx::query(
            "UPDATE profiles
             SET content = jsonb_set(content, '{profile,isPremium}', to_jsonb($2::boolean)),
                 updated_at = $3
             WHERE id = $1",
        )
        .bind(id)
        .bind(premium)
        .bind(updated_at)
        .execute(self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
