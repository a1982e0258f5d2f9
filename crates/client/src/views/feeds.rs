//! Subscription management.

use dioxus::prelude::*;
use myrss_shared::SubscriptionWithLabels;

use crate::components::feeds::{AddFeedForm, LabelEditModal, SubscriptionCard};
use crate::ApiClient;

/// The feeds page: add a feed, list subscriptions, edit labels.
#[component]
pub fn Feeds() -> Element {
    let api = use_context::<ApiClient>();
    let mut editing = use_signal(|| None::<SubscriptionWithLabels>);

    let mut subscriptions = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.subscriptions().await.map_err(|e| e.to_string()) }
        }
    });

    let mut labels = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.labels().await.map_err(|e| e.to_string()) }
        }
    });

    let all_labels = labels
        .read()
        .as_ref()
        .and_then(|result| result.as_ref().ok().cloned())
        .unwrap_or_default();

    rsx! {
        div { class: "space-y-8",
            section { class: "bg-white rounded-lg border border-gray-200 shadow-sm p-5",
                h2 { class: "text-lg font-bold text-gray-900 mb-4", "Add New Feed" }
                AddFeedForm { on_added: move |_| subscriptions.restart() }
            }

            section {
                h2 { class: "text-lg font-bold text-gray-900 mb-4", "Your Subscriptions" }
                match subscriptions.read().as_ref() {
                    Some(Ok(subs)) => rsx! {
                        if subs.is_empty() {
                            p { class: "text-sm text-gray-500",
                                "You haven't subscribed to any feeds yet."
                            }
                        } else {
                            div { class: "space-y-3",
                                for sub in subs.iter() {
                                    SubscriptionCard {
                                        key: "{sub.subscription.id}",
                                        subscription: sub.clone(),
                                        on_edit_labels: {
                                            let sub = sub.clone();
                                            move |_| editing.set(Some(sub.clone()))
                                        },
                                        on_unsubscribed: move |_| subscriptions.restart(),
                                    }
                                }
                            }
                        }
                    },
                    Some(Err(e)) => rsx! {
                        div { class: "p-3 bg-red-50 border border-red-200 rounded-md text-red-700 text-sm",
                            "Failed to load subscriptions: {e}"
                        }
                    },
                    None => rsx! {
                        p { class: "text-sm text-gray-500", "Loading subscriptions..." }
                    },
                }
            }

            if let Some(sub) = editing.read().clone() {
                LabelEditModal {
                    subscription: sub,
                    all_labels: all_labels.clone(),
                    on_close: move |_| editing.set(None),
                    on_saved: move |_| {
                        editing.set(None);
                        subscriptions.restart();
                        labels.restart();
                    },
                }
            }
        }
    }
}
