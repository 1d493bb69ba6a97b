//! # Cards: profile persistence and the two gated views
//!
//! [`ProfileStore`] is the async persistence seam, with one record per user
//! keyed by user id and looked up publicly by alias. The in-memory
//! implementation lives in [`crate::memory`]; the Postgres one in the `api`
//! crate.
//!
//! [`Cards`] sits on top of any store and owns the rules:
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`dashboard`](Cards::dashboard) | The owner's card, or a blank one if nothing was saved yet, with its access status. |
//! | [`is_alias_available`](Cards::is_alias_available) | True unless another user owns the alias. |
//! | [`save`](Cards::save) | Validates the alias, drops script links, keeps the persisted trial fields, upserts. |
//! | [`public_card`](Cards::public_card) | Resolves a slug to the demo card, a live card, an expired card or nothing. |
//! | [`set_premium`](Cards::set_premium) | Flips the premium flag after a confirmed payment. |
//!
//! The premium flag belongs to the payment webhook: [`ProfileStore::upsert`]
//! keeps whatever flag is stored, and only [`ProfileStore::set_premium`]
//! changes it, so a save racing a payment cannot undo it.
//!
//! Both views derive their [`AccessStatus`] through [`card_access`], the only
//! caller of [`evaluate`] in the crate.

use std::error::Error as StdError;
use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::access::{evaluate, AccessStatus};
use crate::alias::{self, AliasError};
use crate::models::CardContent;

/// One persisted card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub user_id: String,
    pub alias: String,
    pub content: CardContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Async trait for loading and storing profile records.
pub trait ProfileStore {
    type Error: StdError + Send + Sync + 'static;

    fn get_by_user(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Option<ProfileRecord>, Self::Error>>;
    fn get_by_alias(
        &self,
        alias: &str,
    ) -> impl Future<Output = Result<Option<ProfileRecord>, Self::Error>>;
    /// User ids of every record currently holding `alias`.
    fn alias_owners(
        &self,
        alias: &str,
    ) -> impl Future<Output = Result<Vec<String>, Self::Error>>;
    /// Insert `record`, or replace the stored one. A replaced record keeps
    /// its stored `isPremium` whatever `record` carries.
    fn upsert(
        &self,
        record: &ProfileRecord,
    ) -> impl Future<Output = Result<(), Self::Error>>;
    /// Set only the premium flag and `updated_at`. False when the user has
    /// no record.
    fn set_premium(
        &self,
        user_id: &str,
        premium: bool,
        updated_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<bool, Self::Error>>;
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Alias(#[from] AliasError),
    #[error("profile store failed: {0}")]
    Store(#[source] Box<dyn StdError + Send + Sync>),
}

impl SaveError {
    fn store(e: impl StdError + Send + Sync + 'static) -> Self {
        SaveError::Store(Box::new(e))
    }
}

/// What the owner sees in the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardCard {
    pub content: CardContent,
    pub access: AccessStatus,
    /// False until the first successful save.
    pub saved: bool,
}

/// What a visitor gets for a slug.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum PublicCard {
    Demo { content: CardContent },
    Active { content: CardContent, access: AccessStatus },
    Expired,
    NotFound,
}

/// Access status of a normalised card at `now`.
pub fn card_access(content: &CardContent, now: DateTime<Utc>) -> AccessStatus {
    let profile = &content.profile;
    evaluate(profile.is_premium(), profile.created_at_or(now), now)
}

pub struct Cards<S: ProfileStore> {
    store: S,
}

impl<S: ProfileStore> Cards<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    async fn load(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<ProfileRecord>, S::Error> {
        let Some(mut record) = self.store.get_by_user(user_id).await? else {
            return Ok(None);
        };
        record.content.normalize(Some(record.created_at), now);
        if record.content.profile.alias.is_empty() {
            record.content.profile.alias = record.alias.clone();
        }
        Ok(Some(record))
    }

    /// The owner's card. A user who never saved gets a blank card whose
    /// trial starts now.
    pub async fn dashboard(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<DashboardCard, S::Error> {
        let (content, saved) = match self.load(user_id, now).await? {
            Some(record) => (record.content, true),
            None => {
                let mut content = CardContent::blank();
                content.normalize(None, now);
                (content, false)
            }
        };
        let access = card_access(&content, now);
        Ok(DashboardCard {
            content,
            access,
            saved,
        })
    }

    pub async fn is_alias_available(&self, alias: &str, user_id: &str) -> Result<bool, S::Error> {
        let owners = self.store.alias_owners(alias).await?;
        Ok(owners.iter().all(|owner| owner == user_id))
    }

    /// Validate and persist the owner's card.
    ///
    /// `is_premium` and `created_at` always come from the stored record (or
    /// `false` / `now` for a first save); whatever the client sent is ignored.
    pub async fn save(
        &self,
        user_id: &str,
        mut content: CardContent,
        now: DateTime<Utc>,
    ) -> Result<DashboardCard, SaveError> {
        let alias = alias::sanitize(&content.profile.alias);
        alias::validate(&alias)?;
        if !self
            .is_alias_available(&alias, user_id)
            .await
            .map_err(SaveError::store)?
        {
            return Err(AliasError::Taken.into());
        }

        let existing = self.load(user_id, now).await.map_err(SaveError::store)?;
        let (record_created_at, profile_created_at, is_premium) = match &existing {
            Some(record) => (
                record.created_at,
                record.content.profile.created_at_or(record.created_at),
                record.content.profile.is_premium(),
            ),
            None => (now, now, false),
        };

        content.drop_unsafe_links();
        content.profile.alias = alias.clone();
        content.profile.created_at = Some(profile_created_at);
        content.profile.is_premium = Some(is_premium);

        let record = ProfileRecord {
            user_id: user_id.to_string(),
            alias,
            content,
            created_at: record_created_at,
            updated_at: now,
        };
        self.store
            .upsert(&record)
            .await
            .map_err(SaveError::store)?;

        // Re-read so a premium flag set meanwhile shows up in the answer.
        let stored = self
            .load(user_id, now)
            .await
            .map_err(SaveError::store)?
            .unwrap_or(record);
        let access = card_access(&stored.content, now);
        Ok(DashboardCard {
            content: stored.content,
            access,
            saved: true,
        })
    }

    /// The card a visitor sees at `/<slug>`.
    pub async fn public_card(&self, slug: &str, now: DateTime<Utc>) -> Result<PublicCard, S::Error> {
        if alias::is_demo(slug) {
            return Ok(PublicCard::Demo {
                content: CardContent::demo(),
            });
        }

        let Some(mut record) = self.store.get_by_alias(slug).await? else {
            return Ok(PublicCard::NotFound);
        };
        record.content.normalize(Some(record.created_at), now);

        let access = card_access(&record.content, now);
        if !access.is_unlocked() {
            return Ok(PublicCard::Expired);
        }
        Ok(PublicCard::Active {
            content: record.content,
            access,
        })
    }

    /// Record the premium flag on an existing card. Returns `None` when the
    /// user has never saved a card.
    pub async fn set_premium(
        &self,
        user_id: &str,
        premium: bool,
        now: DateTime<Utc>,
    ) -> Result<Option<DashboardCard>, S::Error> {
        if !self.store.set_premium(user_id, premium, now).await? {
            return Ok(None);
        }
        let Some(record) = self.load(user_id, now).await? else {
            return Ok(None);
        };

        let access = card_access(&record.content, now);
        Ok(Some(DashboardCard {
            content: record.content,
            access,
            saved: true,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, 1, 9, 30, 0).unwrap()
    }

    fn card_with_alias(alias: &str) -> CardContent {
        let mut content = CardContent::blank();
        content.profile.alias = alias.to_string();
        content.profile.name = "Ana Paula".to_string();
        content
    }

    #[tokio::test]
    async fn test_dashboard_for_new_user() {
        let cards = Cards::new(MemoryStore::new());
        let card = cards.dashboard("u1", now()).await.unwrap();
        assert!(!card.saved);
        assert_eq!(card.access, AccessStatus::TrialActive { days_left: 7 });
        assert_eq!(card.content.profile.created_at, Some(now()));
    }

    #[tokio::test]
    async fn test_first_save_starts_trial() {
        let cards = Cards::new(MemoryStore::new());
        let saved = cards
            .save("u1", card_with_alias("Ana-Paula"), now())
            .await
            .unwrap();
        assert!(saved.saved);
        assert_eq!(saved.content.profile.alias, "ana-paula");
        assert_eq!(saved.content.profile.created_at, Some(now()));

        let later = now() + Duration::days(2);
        let card = cards.dashboard("u1", later).await.unwrap();
        assert_eq!(card.access, AccessStatus::TrialActive { days_left: 5 });
        assert_eq!(card.content.profile.name, "Ana Paula");
    }

    #[tokio::test]
    async fn test_save_ignores_client_trial_fields() {
        let cards = Cards::new(MemoryStore::new());
        cards.save("u1", card_with_alias("anap"), now()).await.unwrap();

        let mut forged = card_with_alias("anap");
        forged.profile.is_premium = Some(true);
        forged.profile.created_at = Some(now() + Duration::days(365));
        let later = now() + Duration::days(1);
        let saved = cards.save("u1", forged, later).await.unwrap();

        assert_eq!(saved.content.profile.is_premium, Some(false));
        assert_eq!(saved.content.profile.created_at, Some(now()));
        let record = cards.store().get_by_user("u1").await.unwrap().unwrap();
        assert_eq!(record.created_at, now());
        assert_eq!(record.updated_at, later);
    }

    #[tokio::test]
    async fn test_save_drops_script_links() {
        let cards = Cards::new(MemoryStore::new());
        let mut content = card_with_alias("joao");
        content.actions[3].url = "javascript:alert(document.cookie)".to_string();
        content.links[0].url = "https://instagram.com/joao".to_string();
        content.links[1].url = "JavaScript:alert(1)".to_string();
        cards.save("u1", content, now()).await.unwrap();

        let record = cards.store().get_by_user("u1").await.unwrap().unwrap();
        assert_eq!(record.content.actions[3].url, "");
        assert_eq!(record.content.links[0].url, "https://instagram.com/joao");
        assert_eq!(record.content.links[1].url, "");
    }

    #[tokio::test]
    async fn test_save_rejects_bad_alias() {
        let cards = Cards::new(MemoryStore::new());
        let err = cards.save("u1", card_with_alias("a!"), now()).await.unwrap_err();
        assert!(matches!(err, SaveError::Alias(AliasError::TooShort)));

        let err = cards
            .save("u1", card_with_alias("Dashboard"), now())
            .await
            .unwrap_err();
        assert!(matches!(err, SaveError::Alias(AliasError::Reserved(_))));
    }

    #[tokio::test]
    async fn test_alias_taken_by_other_user() {
        let cards = Cards::new(MemoryStore::new());
        cards.save("u1", card_with_alias("joao"), now()).await.unwrap();

        assert!(cards.is_alias_available("joao", "u1").await.unwrap());
        assert!(!cards.is_alias_available("joao", "u2").await.unwrap());
        assert!(cards.is_alias_available("maria", "u2").await.unwrap());

        let err = cards.save("u2", card_with_alias("joao"), now()).await.unwrap_err();
        assert!(matches!(err, SaveError::Alias(AliasError::Taken)));
        assert_eq!(
            err.to_string(),
            "Este endereço já está em uso por outro usuário."
        );
    }

    #[tokio::test]
    async fn test_public_card_lifecycle() {
        let cards = Cards::new(MemoryStore::new());
        assert_eq!(
            cards.public_card("joao", now()).await.unwrap(),
            PublicCard::NotFound
        );

        cards.save("u1", card_with_alias("joao"), now()).await.unwrap();
        match cards.public_card("joao", now() + Duration::days(3)).await.unwrap() {
            PublicCard::Active { content, access } => {
                assert_eq!(content.profile.name, "Ana Paula");
                assert_eq!(access, AccessStatus::TrialActive { days_left: 4 });
            }
            other => panic!("expected active card, got {other:?}"),
        }

        let expired_at = now() + Duration::days(7) + Duration::hours(1);
        assert_eq!(
            cards.public_card("joao", expired_at).await.unwrap(),
            PublicCard::Expired
        );
    }

    #[tokio::test]
    async fn test_demo_slugs_never_hit_the_store() {
        let cards = Cards::new(MemoryStore::new());
        for slug in ["demo", "exemplo"] {
            match cards.public_card(slug, now()).await.unwrap() {
                PublicCard::Demo { content } => {
                    assert_eq!(content.profile.name, "Mariana Xavier")
                }
                other => panic!("expected demo card, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_premium_unlocks_expired_card() {
        let cards = Cards::new(MemoryStore::new());
        cards.save("u1", card_with_alias("joao"), now()).await.unwrap();
        let late = now() + Duration::days(30);
        assert_eq!(
            cards.public_card("joao", late).await.unwrap(),
            PublicCard::Expired
        );

        let card = cards.set_premium("u1", true, late).await.unwrap().unwrap();
        assert_eq!(card.access, AccessStatus::Premium);
        assert!(matches!(
            cards.public_card("joao", late).await.unwrap(),
            PublicCard::Active {
                access: AccessStatus::Premium,
                ..
            }
        ));

        // A later save must not drop the flag.
        cards.save("u1", card_with_alias("joao"), late).await.unwrap();
        let card = cards.dashboard("u1", late).await.unwrap();
        assert_eq!(card.access, AccessStatus::Premium);
    }

    /// Lets a payment land between the read and the write of a save.
    struct PaymentDuringSave {
        inner: MemoryStore,
        paid: std::sync::atomic::AtomicBool,
    }

    impl ProfileStore for PaymentDuringSave {
        type Error = std::convert::Infallible;

        async fn get_by_user(&self, user_id: &str) -> Result<Option<ProfileRecord>, Self::Error> {
            let record = self.inner.get_by_user(user_id).await?;
            if !self.paid.swap(true, std::sync::atomic::Ordering::SeqCst) {
                self.inner.set_premium(user_id, true, now()).await?;
            }
            Ok(record)
        }

        async fn get_by_alias(&self, alias: &str) -> Result<Option<ProfileRecord>, Self::Error> {
            self.inner.get_by_alias(alias).await
        }

        async fn alias_owners(&self, alias: &str) -> Result<Vec<String>, Self::Error> {
            self.inner.alias_owners(alias).await
        }

        async fn upsert(&self, record: &ProfileRecord) -> Result<(), Self::Error> {
            self.inner.upsert(record).await
        }

        async fn set_premium(
            &self,
            user_id: &str,
            premium: bool,
            updated_at: DateTime<Utc>,
        ) -> Result<bool, Self::Error> {
            self.inner.set_premium(user_id, premium, updated_at).await
        }
    }

    #[tokio::test]
    async fn test_save_racing_payment_keeps_premium() {
        let memory = MemoryStore::new();
        Cards::new(memory.clone())
            .save("u1", card_with_alias("joao"), now())
            .await
            .unwrap();

        let cards = Cards::new(PaymentDuringSave {
            inner: memory,
            paid: std::sync::atomic::AtomicBool::new(false),
        });
        let saved = cards.save("u1", card_with_alias("joao"), now()).await.unwrap();
        assert_eq!(saved.access, AccessStatus::Premium);

        let late = now() + Duration::days(30);
        let card = cards.dashboard("u1", late).await.unwrap();
        assert_eq!(card.access, AccessStatus::Premium);
    }

    #[tokio::test]
    async fn test_set_premium_without_card() {
        let cards = Cards::new(MemoryStore::new());
        assert!(cards.set_premium("ghost", true, now()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_dashboard_and_public_views_agree() {
        let cards = Cards::new(MemoryStore::new());
        cards.save("u1", card_with_alias("joao"), now()).await.unwrap();

        let mut at = now();
        let end = now() + Duration::days(9);
        while at <= end {
            let owner = cards.dashboard("u1", at).await.unwrap().access;
            let visitor = cards.public_card("joao", at).await.unwrap();
            match visitor {
                PublicCard::Active { access, .. } => assert_eq!(access, owner),
                PublicCard::Expired => assert_eq!(owner, AccessStatus::TrialExpired),
                other => panic!("unexpected {other:?}"),
            }
            at += Duration::hours(5);
        }
    }

    #[tokio::test]
    async fn test_legacy_record_without_trial_fields() {
        let store = MemoryStore::new();
        let row_created = now() - Duration::days(2);
        let content: CardContent =
            serde_json::from_str(r#"{"profile":{"name":"Legado"}}"#).unwrap();
        store
            .upsert(&ProfileRecord {
                user_id: "u9".to_string(),
                alias: "legado".to_string(),
                content,
                created_at: row_created,
                updated_at: row_created,
            })
            .await
            .unwrap();

        let cards = Cards::new(store);
        let card = cards.dashboard("u9", now()).await.unwrap();
        assert_eq!(card.content.profile.alias, "legado");
        assert_eq!(card.content.profile.created_at, Some(row_created));
        assert_eq!(card.access, AccessStatus::TrialActive { days_left: 5 });
    }
}
