//! Reading and writing the signed-in user on the session.

use tower_sessions::Session;
use uuid::Uuid;

use crate::error::ApiError;

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// The signed-in user, if any. A malformed stored id counts as signed out.
pub async fn current_user_id(session: &Session) -> Result<Option<Uuid>, ApiError> {
    let user_id: Option<String> = session.get(SESSION_USER_ID_KEY).await?;
    Ok(user_id.and_then(|id| Uuid::parse_str(&id).ok()))
}

pub async fn require_user_id(session: &Session) -> Result<Uuid, ApiError> {
    current_user_id(session)
        .await?
        .ok_or(ApiError::Unauthenticated)
}

/// Attach `user_id` to the session, rotating the session id first.
pub async fn sign_in(session: &Session, user_id: Uuid) -> Result<(), ApiError> {
    session.cycle_id().await?;
    session
        .insert(SESSION_USER_ID_KEY, user_id.to_string())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_sign_in_roundtrip() {
        let session = session();
        assert_eq!(current_user_id(&session).await.unwrap(), None);
        assert!(matches!(
            require_user_id(&session).await,
            Err(ApiError::Unauthenticated)
        ));

        let id = Uuid::new_v4();
        sign_in(&session, id).await.unwrap();
        assert_eq!(require_user_id(&session).await.unwrap(), id);
    }

    #[tokio::test]
    async fn test_garbage_id_is_signed_out() {
        let session = session();
        session
            .insert(SESSION_USER_ID_KEY, "not-a-uuid")
            .await
            .unwrap();
        assert_eq!(current_user_id(&session).await.unwrap(), None);
    }
}
