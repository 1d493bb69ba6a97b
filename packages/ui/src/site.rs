use api::SiteConfig;
use dioxus::prelude::*;

/// Site settings loaded from the server, defaults until the first response.
pub fn use_site_config() -> Signal<SiteConfig> {
    use_context::<Signal<SiteConfig>>()
}

#[component]
pub fn SiteProvider(children: Element) -> Element {
    let mut config = use_signal(SiteConfig::default);

    let _ = use_resource(move || async move {
        match api::get_site_config().await {
            Ok(site) => config.set(site),
            Err(e) => tracing::warn!("Using default site config: {}", e),
        }
    });

    use_context_provider(|| config);

    rsx! {
        {children}
    }
}
