mod landing;
pub use landing::LandingView;

mod dashboard;
pub use dashboard::DashboardView;

mod public_card;
pub use public_card::PublicCardView;

mod checkout_status;
pub use checkout_status::CheckoutStatusView;
