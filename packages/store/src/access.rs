//! # Access gate: trial window and premium unlock
//!
//! Every non-premium card gets a trial of [`TRIAL_DAYS`] days starting at the
//! profile's creation instant. [`evaluate`] is the single place that decides
//! whether a card is unlocked; the dashboard and the public card both call it
//! through [`crate::Cards`], so the two views can never disagree.
//!
//! All arithmetic is on UTC instants. A day is 24 hours; `days_left` is the
//! number of started days remaining, so a card created right now reports 7 and
//! a card whose trial ends this very instant reports 0.
//!
//! The gate never sees a missing creation time: callers substitute "now"
//! beforehand (see [`crate::ProfileData::created_at_or`]).

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Length of the free trial.
pub const TRIAL_DAYS: i64 = 7;

const SECS_PER_DAY: i64 = 86_400;

/// Whether a card is unlocked, and why.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum AccessStatus {
    Premium,
    TrialActive {
        #[serde(rename = "daysLeft")]
        days_left: u32,
    },
    TrialExpired,
}

impl AccessStatus {
    /// Premium or still inside the trial.
    pub fn is_unlocked(&self) -> bool {
        !matches!(self, AccessStatus::TrialExpired)
    }

    pub fn is_premium(&self) -> bool {
        matches!(self, AccessStatus::Premium)
    }

    /// Short badge text shown in the dashboard header.
    pub fn label(&self) -> String {
        match self {
            AccessStatus::Premium => "PRO VITALÍCIO".to_string(),
            AccessStatus::TrialActive { days_left } => format!("TESTE: {days_left} DIAS"),
            AccessStatus::TrialExpired => "TESTE EXPIRADO".to_string(),
        }
    }
}

/// Last instant at which a card created at `created_at` is still in trial.
pub fn trial_ends_at(created_at: DateTime<Utc>) -> DateTime<Utc> {
    created_at
        .checked_add_signed(Duration::days(TRIAL_DAYS))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Decide the access status of a card at instant `now`.
pub fn evaluate(is_premium: bool, created_at: DateTime<Utc>, now: DateTime<Utc>) -> AccessStatus {
    if is_premium {
        return AccessStatus::Premium;
    }

    let trial_end = trial_ends_at(created_at);
    if now > trial_end {
        return AccessStatus::TrialExpired;
    }

    let remaining = trial_end.signed_duration_since(now);
    let secs = remaining.num_seconds();
    let partial = secs % SECS_PER_DAY != 0 || remaining.subsec_nanos() != 0;
    let days = secs / SECS_PER_DAY + i64::from(partial);

    AccessStatus::TrialActive {
        days_left: u32::try_from(days.max(0)).unwrap_or(u32::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_premium_ignores_dates() {
        let ancient = Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(evaluate(true, ancient, now()), AccessStatus::Premium);
        assert_eq!(evaluate(true, now(), ancient), AccessStatus::Premium);
        assert_eq!(evaluate(true, now(), now()), AccessStatus::Premium);
    }

    #[test]
    fn test_fresh_card_has_full_trial() {
        assert_eq!(
            evaluate(false, now(), now()),
            AccessStatus::TrialActive { days_left: 7 }
        );
    }

    #[test]
    fn test_partial_day_rounds_up() {
        let created = now() - Duration::hours(1);
        assert_eq!(
            evaluate(false, created, now()),
            AccessStatus::TrialActive { days_left: 7 }
        );

        let created = now() - Duration::days(6) - Duration::hours(23);
        assert_eq!(
            evaluate(false, created, now()),
            AccessStatus::TrialActive { days_left: 1 }
        );

        let created = now() - Duration::days(7) + Duration::nanoseconds(1);
        assert_eq!(
            evaluate(false, created, now()),
            AccessStatus::TrialActive { days_left: 1 }
        );
    }

    #[test]
    fn test_expired_after_eight_days() {
        let created = now() - Duration::days(8);
        assert_eq!(evaluate(false, created, now()), AccessStatus::TrialExpired);
    }

    #[test]
    fn test_expired_just_past_boundary() {
        let created = now() - Duration::days(7) - Duration::hours(1);
        assert_eq!(evaluate(false, created, now()), AccessStatus::TrialExpired);

        let created = now() - Duration::days(7) - Duration::nanoseconds(1);
        assert_eq!(evaluate(false, created, now()), AccessStatus::TrialExpired);
    }

    #[test]
    fn test_zero_days_exactly_at_boundary() {
        let created = now() - Duration::days(7);
        assert_eq!(
            evaluate(false, created, now()),
            AccessStatus::TrialActive { days_left: 0 }
        );
        assert!(evaluate(false, created, now()).is_unlocked());
    }

    #[test]
    fn test_days_left_never_increases() {
        let created = now();
        let end = trial_ends_at(created);
        let mut previous = u32::MAX;
        let mut at = created;
        while at <= end {
            match evaluate(false, created, at) {
                AccessStatus::TrialActive { days_left } => {
                    assert!(days_left <= previous, "days_left grew at {at}");
                    previous = days_left;
                }
                other => panic!("unexpected {other:?} at {at}"),
            }
            at += Duration::minutes(37);
        }
        assert_eq!(
            evaluate(false, created, end),
            AccessStatus::TrialActive { days_left: 0 }
        );
        assert_eq!(
            evaluate(false, created, end + Duration::nanoseconds(1)),
            AccessStatus::TrialExpired
        );
    }

    #[test]
    fn test_future_creation_time() {
        let created = now() + Duration::days(3);
        assert_eq!(
            evaluate(false, created, now()),
            AccessStatus::TrialActive { days_left: 10 }
        );
        assert!(evaluate(false, DateTime::<Utc>::MAX_UTC, now()).is_unlocked());
    }

    #[test]
    fn test_labels() {
        assert_eq!(AccessStatus::Premium.label(), "PRO VITALÍCIO");
        assert_eq!(
            AccessStatus::TrialActive { days_left: 3 }.label(),
            "TESTE: 3 DIAS"
        );
        assert!(!AccessStatus::TrialExpired.is_unlocked());
        assert!(AccessStatus::Premium.is_premium());
    }

    #[test]
    fn test_serializes_with_status_tag() {
        let json = serde_json::to_string(&AccessStatus::TrialActive { days_left: 2 }).unwrap();
        assert_eq!(json, r#"{"status":"trialActive","daysLeft":2}"#);
    }
}
