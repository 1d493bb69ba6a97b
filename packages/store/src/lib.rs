pub mod access;
pub mod alias;
pub mod config;
pub mod models;
pub mod repo;
pub mod route;
pub mod theme;
pub mod vcard;

mod memory;
pub use memory::MemoryStore;

pub use access::{evaluate, AccessStatus, TRIAL_DAYS};
pub use alias::AliasError;
pub use config::SiteConfig;
pub use models::{ActionKind, CardContent, DocumentInfo, ProfileData, QuickAction, SocialLink};
pub use repo::{Cards, DashboardCard, ProfileRecord, ProfileStore, PublicCard, SaveError};
pub use route::{resolve, CheckoutKind, Route, Router};
