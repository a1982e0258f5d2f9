//! MyRSS Client - Main entry point
//!
//! A Dioxus application for the MyRSS reader server.
//! Supports both web (WASM) and desktop platforms.

#![allow(non_snake_case)]

use std::sync::Arc;

use dioxus::prelude::*;
use myrss_client::stores::items::ItemStoreSink;
use myrss_client::{ApiClient, ReadStateSynchronizer, Route};

// Assets
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    // Initialize tracing for desktop
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("myrss_client=debug")),
            )
            .init();
    }

    dioxus::launch(App);
}

/// In the browser the client talks to its own origin; desktop builds
/// point at the server named by `MYRSS_SERVER`.
fn default_api_client() -> ApiClient {
    #[cfg(target_arch = "wasm32")]
    return ApiClient::new();

    #[cfg(not(target_arch = "wasm32"))]
    ApiClient::new().with_base_url(std::env::var("MYRSS_SERVER").unwrap_or_default())
}

#[component]
fn App() -> Element {
    let api = use_context_provider(default_api_client);
    use_context_provider(|| {
        ReadStateSynchronizer::new(Arc::new(api.clone()), Arc::new(ItemStoreSink))
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
