use dioxus::prelude::*;

use ui::views::{CheckoutStatusView, DashboardView, LandingView, PublicCardView};
use ui::{AuthProvider, SiteProvider};

#[cfg(feature = "server")]
mod webhook;

/// Every path lands on [`Screen`], which hands it to `store::resolve`.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/:..segments")]
    Screen { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("Failed to start the tokio runtime")
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use axum::routing::post;
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api=debug,web=debug"));
    // dx serve may have installed a subscriber already.
    let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();

    // Initialize database pool
    let pool = api::db::get_pool()
        .await
        .expect("Failed to connect to database");

    // Run migrations
    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");

    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .expect("Failed to create the session table");

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7)
                .try_into()
                .expect("valid session expiry"),
        )); // 7 days

    if api::config::premium_webhook_secret().is_none() {
        tracing::warn!("PREMIUM_WEBHOOK_SECRET not set; premium webhook disabled");
    }
    tracing::info!("Site: {}", api::config::site_config().site.base_url);

    let router = axum::Router::new()
        .route("/webhooks/premium", post(webhook::premium_webhook))
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind the listen address");
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .expect("Server error");
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::FONT_AWESOME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SiteProvider {
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}

#[component]
fn Root() -> Element {
    rsx! {
        ScreenView { route: store::Route::Home }
    }
}

#[component]
fn Screen(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        ScreenView { route: store::resolve(&path) }
    }
}

/// Render the screen for a resolved route, with in-app navigation wired to
/// the Dioxus router.
#[component]
fn ScreenView(route: store::Route) -> Element {
    let nav = use_navigator();
    let on_navigate = move |path: String| match path.parse::<Route>() {
        Ok(target) => {
            nav.push(target);
        }
        Err(_) => {
            tracing::warn!("No route for {}", path);
            nav.push(Route::Root {});
        }
    };

    match route {
        store::Route::Home => rsx! { LandingView { on_navigate } },
        store::Route::Dashboard => rsx! { DashboardView { on_navigate } },
        store::Route::CheckoutStatus { kind } => rsx! {
            CheckoutStatusView { kind, on_navigate }
        },
        store::Route::PublicCard { slug } => {
            let key = slug.clone();
            rsx! {
                PublicCardView { key: "{key}", slug, on_navigate }
            }
        }
    }
}
