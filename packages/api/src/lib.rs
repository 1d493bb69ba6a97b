//! # API crate: fullstack server functions for Cartão Pro
//!
//! Defines every Dioxus server function the web frontend calls, plus the
//! server-side modules behind them.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Password hashing and the session user |
//! | [`config`] | `server` | Environment variables and the site TOML |
//! | [`db`] | `server` | PostgreSQL pool and [`db::PgProfileStore`] |
//! | [`error`] | `server` | [`error::ApiError`] and its conversion to `ServerFnError` |
//! | [`models`] | partly `server` | `users` / `profiles` rows and the client-safe [`UserInfo`] |
//!
//! ## Server functions exposed here
//!
//! Each is compiled twice: with full logic behind `#[cfg(feature = "server")]`
//! and as a thin client stub otherwise.
//!
//! - **Authentication**: `get_current_user`, `register`, `login_password`, `logout`
//! - **Dashboard**: `get_my_card`, `save_my_card`, `check_alias`
//! - **Public**: `get_public_card`, `get_site_config`
//!
//! [`grant_premium`] is not a server function; the web server calls it from
//! the payment webhook.

use dioxus::prelude::*;

pub mod auth;
#[cfg(feature = "server")]
pub mod config;
pub mod db;
#[cfg(feature = "server")]
pub mod error;
pub mod models;

pub use models::UserInfo;
pub use store::{AccessStatus, CardContent, DashboardCard, PublicCard, SiteConfig};

#[cfg(feature = "server")]
fn cards(pool: &'static sqlx::PgPool) -> store::Cards<db::PgProfileStore> {
    store::Cards::new(db::PgProfileStore::new(pool))
}

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::error::ApiError;
    use crate::models::User;

    let Some(user_id) = auth::current_user_id(&session).await? else {
        return Ok(None);
    };

    let pool = get_pool().await.map_err(ApiError::from)?;
    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(ApiError::from)?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Create an account with email and password and sign it in.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::error::ApiError;

    let email = email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::Validation("Informe um e-mail válido.".to_string()).into());
    }
    if password.chars().count() < auth::MIN_PASSWORD_LEN {
        return Err(ApiError::Validation(format!(
            "A senha deve ter pelo menos {} caracteres.",
            auth::MIN_PASSWORD_LEN
        ))
        .into());
    }

    let pool = get_pool().await.map_err(ApiError::from)?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT 1 FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(ApiError::from)?;
    if existing.is_some() {
        return Err(
            ApiError::Validation("Este e-mail já está cadastrado.".to_string()).into(),
        );
    }

    let password_hash = auth::hash_password(&password)?;
    let user: models::User = sqlx::query_as(
        "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING *",
    )
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(ApiError::from)?;

    auth::sign_in(&session, user.id).await?;
    tracing::info!("Registered user {}", user.id);

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login-password", session: tower_sessions::Session)]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::error::ApiError;

    let email = email.trim().to_lowercase();
    let pool = get_pool().await.map_err(ApiError::from)?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(ApiError::from)?;

    let Some(user) = user else {
        return Err(ApiError::InvalidCredentials.into());
    };
    if !auth::verify_password(&password, &user.password_hash)? {
        tracing::warn!("Failed login for user {}", user.id);
        return Err(ApiError::InvalidCredentials.into());
    }

    auth::sign_in(&session, user.id).await?;
    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login-password")]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session.flush().await.map_err(error::ApiError::from)?;
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// The signed-in owner's card with its access status.
#[cfg(feature = "server")]
#[get("/api/card", session: tower_sessions::Session)]
pub async fn get_my_card() -> Result<DashboardCard, ServerFnError> {
    use crate::error::ApiError;

    let user_id = auth::require_user_id(&session).await?;
    let pool = db::get_pool().await.map_err(ApiError::from)?;
    let card = cards(pool)
        .dashboard(&user_id.to_string(), chrono::Utc::now())
        .await
        .map_err(ApiError::from)?;
    Ok(card)
}

#[cfg(not(feature = "server"))]
#[get("/api/card")]
pub async fn get_my_card() -> Result<DashboardCard, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Validate and store the signed-in owner's card.
#[cfg(feature = "server")]
#[post("/api/card", session: tower_sessions::Session)]
pub async fn save_my_card(content: CardContent) -> Result<DashboardCard, ServerFnError> {
    use crate::error::ApiError;

    let user_id = auth::require_user_id(&session).await?;
    let pool = db::get_pool().await.map_err(ApiError::from)?;

    match cards(pool)
        .save(&user_id.to_string(), content, chrono::Utc::now())
        .await
    {
        Ok(card) => {
            tracing::info!("Saved card /{} for {}", card.content.profile.alias, user_id);
            Ok(card)
        }
        Err(e) => {
            let err = ApiError::from(e);
            tracing::warn!("Rejected card save for {}: {}", user_id, err);
            Err(err.into())
        }
    }
}

#[cfg(not(feature = "server"))]
#[post("/api/card")]
pub async fn save_my_card(content: CardContent) -> Result<DashboardCard, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Whether the signed-in owner may take `alias`.
#[cfg(feature = "server")]
#[post("/api/card/alias", session: tower_sessions::Session)]
pub async fn check_alias(alias: String) -> Result<bool, ServerFnError> {
    use crate::error::ApiError;

    let user_id = auth::require_user_id(&session).await?;
    let alias = store::alias::sanitize(&alias);
    if store::alias::validate(&alias).is_err() {
        return Ok(false);
    }

    let pool = db::get_pool().await.map_err(ApiError::from)?;
    let available = cards(pool)
        .is_alias_available(&alias, &user_id.to_string())
        .await
        .map_err(ApiError::from)?;
    Ok(available)
}

#[cfg(not(feature = "server"))]
#[post("/api/card/alias")]
pub async fn check_alias(alias: String) -> Result<bool, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// The card a visitor sees at `/<slug>`.
#[cfg(feature = "server")]
#[get("/api/cards/:slug")]
pub async fn get_public_card(slug: String) -> Result<PublicCard, ServerFnError> {
    use crate::error::ApiError;

    let pool = db::get_pool().await.map_err(ApiError::from)?;
    let card = cards(pool)
        .public_card(&slug, chrono::Utc::now())
        .await
        .map_err(ApiError::from)?;
    Ok(card)
}

#[cfg(not(feature = "server"))]
#[get("/api/cards/:slug")]
pub async fn get_public_card(slug: String) -> Result<PublicCard, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Site settings the frontend needs (brand, share origin, payment link).
#[cfg(feature = "server")]
#[get("/api/site")]
pub async fn get_site_config() -> Result<SiteConfig, ServerFnError> {
    Ok(config::site_config().clone())
}

#[cfg(not(feature = "server"))]
#[get("/api/site")]
pub async fn get_site_config() -> Result<SiteConfig, ServerFnError> {
    Ok(SiteConfig::default())
}

/// Set or clear the premium flag on a user's card. Returns `None` when the
/// user has no saved card yet.
#[cfg(feature = "server")]
pub async fn grant_premium(
    user_id: &str,
    premium: bool,
) -> Result<Option<DashboardCard>, error::ApiError> {
    let pool = db::get_pool().await?;
    let card = cards(pool)
        .set_premium(user_id, premium, chrono::Utc::now())
        .await?;
    match &card {
        Some(_) => tracing::info!("Premium set to {} for {}", premium, user_id),
        None => tracing::warn!("Premium update for {} without a saved card", user_id),
    }
    Ok(card)
}
