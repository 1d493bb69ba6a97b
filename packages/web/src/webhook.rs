//! `POST /webhooks/premium`: the payment provider's confirmation hook.
//!
//! This is the only way a card becomes premium. The caller must present
//! `Authorization: Bearer $PREMIUM_WEBHOOK_SECRET`; with the variable unset
//! the route answers 404.

use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use axum::Json;
use serde::Deserialize;

use api::error::ApiError;
use api::DashboardCard;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumGrant {
    pub user_id: String,
    #[serde(default = "default_premium")]
    pub premium: bool,
}

fn default_premium() -> bool {
    true
}

fn bearer_matches(header: Option<&str>, secret: &str) -> bool {
    header
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| token.trim() == secret)
}

pub async fn premium_webhook(headers: HeaderMap, Json(grant): Json<PremiumGrant>) -> StatusCode {
    let Some(secret) = api::config::premium_webhook_secret() else {
        return StatusCode::NOT_FOUND;
    };
    let header = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    if !bearer_matches(header, &secret) {
        tracing::warn!("Rejected premium webhook with a bad token");
        return StatusCode::UNAUTHORIZED;
    }

    if grant.user_id.trim().is_empty() {
        return StatusCode::BAD_REQUEST;
    }

    let result = api::grant_premium(grant.user_id.trim(), grant.premium).await;
    if let Err(e) = &result {
        tracing::error!("Premium webhook for {} failed: {}", grant.user_id, e);
    }
    grant_status(&result)
}

/// Unknown users (including ids that are not UUIDs) answer 404 so the
/// provider stops retrying; only real failures answer 500.
fn grant_status(result: &Result<Option<DashboardCard>, ApiError>) -> StatusCode {
    match result {
        Ok(Some(_)) => StatusCode::NO_CONTENT,
        Ok(None) => StatusCode::NOT_FOUND,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token() {
        assert!(bearer_matches(Some("Bearer s3cret"), "s3cret"));
        assert!(!bearer_matches(Some("Bearer wrong"), "s3cret"));
        assert!(!bearer_matches(Some("s3cret"), "s3cret"));
        assert!(!bearer_matches(None, "s3cret"));
    }

    #[test]
    fn test_grant_defaults_to_premium() {
        let grant: PremiumGrant = serde_json::from_str(r#"{"userId":"abc"}"#).unwrap();
        assert_eq!(grant.user_id, "abc");
        assert!(grant.premium);
    }

    #[test]
    fn test_grant_status() {
        assert_eq!(grant_status(&Ok(None)), StatusCode::NOT_FOUND);
        let failed = Err(ApiError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(grant_status(&failed), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
