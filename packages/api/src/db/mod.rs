//! # Database: PostgreSQL pool and the profile store
//!
//! Everything here is gated behind `#[cfg(feature = "server")]` so client
//! (WASM) builds never pull in SQLx.
//!
//! - [`get_pool`]: lazy process-wide pool in a [`tokio::sync::OnceCell`],
//!   opened from `DATABASE_URL` on first use.
//! - [`PgProfileStore`]: [`store::ProfileStore`] over the `profiles` table.
//!
//! Schema lives in `packages/api/migrations` and is applied by the web server
//! at start-up.

#[cfg(feature = "server")]
mod pool;
#[cfg(feature = "server")]
mod profiles;

#[cfg(feature = "server")]
pub use pool::get_pool;
#[cfg(feature = "server")]
pub use profiles::PgProfileStore;
