//! Email + password authentication and session helpers.

#[cfg(feature = "server")]
mod password;
#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use password::{hash_password, verify_password, MIN_PASSWORD_LEN};
#[cfg(feature = "server")]
pub use session::{current_user_id, require_user_id, sign_in, SESSION_USER_ID_KEY};
