//! The item timeline.

use dioxus::prelude::*;

use crate::components::items::{ItemRow, RefreshButton};
use crate::components::ui::{Button, ButtonVariant};
use crate::stores::items::{StoredItem, ITEMS};
use crate::ApiClient;
use crate::Route;

/// Paginated timeline of items across all subscribed feeds.
///
/// Fetched pages land in the global item store and are rendered from
/// it, so confirmed mark-read transitions show up without a refetch.
#[component]
pub fn Home() -> Element {
    let api = use_context::<ApiClient>();
    let mut page = use_signal(|| 1i64);

    let mut items_res = use_resource(move || {
        let requested = page();
        let api = api.clone();
        async move {
            match api.items_page(requested).await {
                Ok(fetched) => {
                    ITEMS.resolve().write().set_page(
                        fetched.page,
                        fetched.items.into_iter().map(StoredItem::from).collect(),
                        fetched.has_more,
                    );
                    Ok(())
                }
                Err(err) => Err(err.to_string()),
            }
        }
    });

    let feed = ITEMS.resolve().read().clone();

    rsx! {
        div { class: "space-y-4",
            div { class: "flex items-center justify-between",
                h2 { class: "text-xl font-bold text-gray-900", "Latest Items" }
                RefreshButton {
                    on_refreshed: move |_| {
                        page.set(1);
                        items_res.restart();
                    },
                }
            }

            match items_res.read().as_ref() {
                Some(Err(e)) => rsx! {
                    div { class: "p-3 bg-red-50 border border-red-200 rounded-md text-red-700 text-sm",
                        "Failed to load items: {e}"
                    }
                },
                None if !feed.is_loaded => rsx! {
                    div { class: "text-sm text-gray-500", "Loading items..." }
                },
                _ => rsx! {
                    if feed.items.is_empty() {
                        div { class: "bg-white rounded-lg border border-gray-200 p-8 text-center space-y-2",
                            h3 { class: "text-lg font-semibold text-gray-900", "No items yet" }
                            p { class: "text-sm text-gray-500",
                                "Subscribe to some feeds to start reading!"
                            }
                            Link {
                                to: Route::Feeds {},
                                class: "inline-block text-sm font-medium text-blue-700 hover:underline",
                                "Add Feeds"
                            }
                        }
                    } else {
                        div { class: "space-y-3",
                            for item in feed.items.iter() {
                                ItemRow { key: "{item.id}", item: item.clone() }
                            }
                        }
                        div { class: "flex items-center justify-center gap-4 pt-2",
                            if feed.page > 1 {
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    onclick: move |_| page.set(page() - 1),
                                    "\u{2190} Previous"
                                }
                            }
                            span { class: "text-sm text-gray-500", "Page {feed.page}" }
                            if feed.has_more {
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    onclick: move |_| page.set(page() + 1),
                                    "Next \u{2192}"
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
