//! The "Refresh All" control.

use dioxus::prelude::*;

use crate::components::ui::{Button, ButtonVariant};
use crate::log_error;
use crate::ApiClient;

/// Asks the server to re-fetch every subscribed feed.
///
/// Disabled while the request is in flight; `on_refreshed` fires only
/// after the server reports success so the caller can reload the
/// timeline.
#[component]
pub fn RefreshButton(on_refreshed: EventHandler<()>) -> Element {
    let api = use_context::<ApiClient>();
    let mut is_refreshing = use_signal(|| false);

    let handle_click = move |_| {
        if *is_refreshing.read() {
            return;
        }
        is_refreshing.set(true);
        let api = api.clone();
        let on_refreshed = on_refreshed.clone();
        spawn(async move {
            match api.refresh().await {
                Ok(()) => on_refreshed.call(()),
                Err(err) => log_error!("feed refresh failed: {err}"),
            }
            is_refreshing.set(false);
        });
    };

    rsx! {
        Button {
            variant: ButtonVariant::Secondary,
            disabled: *is_refreshing.read(),
            onclick: handle_click,
            if *is_refreshing.read() {
                "Refreshing..."
            } else {
                "Refresh All"
            }
        }
    }
}
