//! A single subscription on the feeds page.

use dioxus::prelude::*;
use myrss_shared::{user_message, SubscriptionWithLabels};

use crate::components::ui::{Button, ButtonVariant};
use crate::date_format::relative_to_now;
use crate::log_error;
use crate::ApiClient;

#[component]
pub fn SubscriptionCard(
    subscription: SubscriptionWithLabels,
    on_edit_labels: EventHandler<()>,
    on_unsubscribed: EventHandler<()>,
) -> Element {
    let api = use_context::<ApiClient>();
    let mut is_removing = use_signal(|| false);

    let feed_id = subscription.subscription.feed_id;
    let handle_unsubscribe = move |_| {
        if *is_removing.read() {
            return;
        }
        is_removing.set(true);
        let api = api.clone();
        let on_unsubscribed = on_unsubscribed.clone();
        spawn(async move {
            match api.unsubscribe(feed_id).await {
                Ok(()) => on_unsubscribed.call(()),
                Err(err) => log_error!("unsubscribe failed: {}", user_message(&err)),
            }
            is_removing.set(false);
        });
    };

    rsx! {
        div { class: "bg-white rounded-lg border border-gray-200 shadow-sm p-4 flex items-start justify-between gap-4",
            div { class: "min-w-0",
                h3 { class: "text-base font-semibold text-gray-900 truncate",
                    {subscription.display_title().to_string()}
                }
                p { class: "text-xs text-gray-500 truncate", "{subscription.feed_url}" }
                if let Some(description) = subscription.feed_description.clone() {
                    p { class: "text-sm text-gray-600 mt-1", "{description}" }
                }
                if !subscription.labels.is_empty() {
                    div { class: "flex flex-wrap gap-1.5 mt-2",
                        for label in subscription.labels.iter() {
                            span {
                                key: "{label.id}",
                                class: "inline-flex items-center px-2 py-0.5 rounded-full text-xs text-white",
                                style: "background-color: {label.color}",
                                "{label.name}"
                            }
                        }
                    }
                }
                if let Some(last_fetched) = subscription.last_fetched {
                    p { class: "text-xs text-gray-400 mt-2",
                        "Last updated {relative_to_now(last_fetched)}"
                    }
                }
            }
            div { class: "flex flex-col gap-2 flex-shrink-0",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_edit_labels.call(()),
                    "Edit Labels"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    disabled: *is_removing.read(),
                    onclick: handle_unsubscribe,
                    if *is_removing.read() {
                        "Removing..."
                    } else {
                        "Unsubscribe"
                    }
                }
            }
        }
    }
}
