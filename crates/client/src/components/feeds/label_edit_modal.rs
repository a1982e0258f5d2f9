//! Modal for editing a subscription's labels.

use dioxus::prelude::*;
use myrss_shared::{parse_labels, user_message, Label, SubscriptionWithLabels};

use crate::browser;
use crate::components::ui::{Button, ButtonVariant, TextInput};
use crate::ApiClient;

/// Combine checked existing labels with freshly typed ones.
///
/// Checked labels keep the order of `all`; new entries from the raw
/// comma-separated value are appended, skipping any name already
/// present.
fn combined_labels(all: &[Label], checked: &[String], raw_extra: &str) -> Vec<String> {
    let mut labels: Vec<String> = all
        .iter()
        .filter(|label| checked.contains(&label.name))
        .map(|label| label.name.clone())
        .collect();
    for entry in parse_labels(raw_extra) {
        if !labels.contains(&entry) {
            labels.push(entry);
        }
    }
    labels
}

/// Edit the labels attached to one subscription.
///
/// Checkboxes cover the user's existing labels, pre-checked from the
/// subscription; the text input accepts new comma-separated labels. On
/// a confirmed save the page is reloaded so every surface reflects the
/// new label set.
#[component]
pub fn LabelEditModal(
    subscription: SubscriptionWithLabels,
    all_labels: Vec<Label>,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let api = use_context::<ApiClient>();
    let mut checked = use_signal(|| {
        subscription
            .labels
            .iter()
            .map(|label| label.name.clone())
            .collect::<Vec<String>>()
    });
    let mut new_labels = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_saving = use_signal(|| false);

    let subscription_id = subscription.subscription.id;
    let labels_for_save = all_labels.clone();
    let handle_save = move |e: FormEvent| {
        e.prevent_default();
        let labels = combined_labels(&labels_for_save, &checked.read(), &new_labels.read());

        is_saving.set(true);
        let api = api.clone();
        let on_saved = on_saved.clone();
        spawn(async move {
            match api.update_labels(subscription_id, &labels).await {
                Ok(()) => {
                    browser::reload_page();
                    on_saved.call(());
                }
                Err(err) => {
                    error.set(Some(user_message(&err)));
                    is_saving.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 flex items-center justify-center z-50",
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-white rounded-lg shadow-xl w-full max-w-md mx-4",
                onclick: move |e| e.stop_propagation(),
                div { class: "px-6 py-4 border-b border-gray-200",
                    h3 { class: "text-lg font-semibold text-gray-900", "Edit Labels" }
                    p { class: "text-sm text-gray-500 mt-0.5",
                        {subscription.display_title().to_string()}
                    }
                }
                form { onsubmit: handle_save,
                    div { class: "p-6 space-y-4",
                        if all_labels.is_empty() {
                            p { class: "text-sm text-gray-500 italic", "No labels yet" }
                        } else {
                            div { class: "space-y-2",
                                for existing in all_labels.iter() {
                                    label {
                                        key: "{existing.id}",
                                        class: "flex items-center gap-2 text-sm text-gray-700 cursor-pointer",
                                        input {
                                            r#type: "checkbox",
                                            checked: checked.read().contains(&existing.name),
                                            onchange: {
                                                let name = existing.name.clone();
                                                move |_| {
                                                    let mut current = checked.read().clone();
                                                    if let Some(pos) =
                                                        current.iter().position(|n| n == &name)
                                                    {
                                                        current.remove(pos);
                                                    } else {
                                                        current.push(name.clone());
                                                    }
                                                    checked.set(current);
                                                }
                                            },
                                        }
                                        span {
                                            class: "inline-block w-2.5 h-2.5 rounded-full",
                                            style: "background-color: {existing.color}",
                                        }
                                        "{existing.name}"
                                    }
                                }
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-1",
                                "New labels (comma-separated)"
                            }
                            TextInput {
                                value: new_labels.read().clone(),
                                placeholder: "technology, news",
                                oninput: move |e: FormEvent| new_labels.set(e.value()),
                            }
                        }
                        if let Some(err) = error.read().as_ref() {
                            div { class: "p-3 bg-red-50 border border-red-200 rounded-md text-red-700 text-sm",
                                "{err}"
                            }
                        }
                    }
                    div { class: "px-6 py-4 border-t border-gray-200 flex justify-end gap-3",
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit".to_string(),
                            disabled: *is_saving.read(),
                            if *is_saving.read() {
                                "Saving..."
                            } else {
                                "Save Labels"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn label(name: &str) -> Label {
        Label {
            id: Uuid::nil(),
            name: name.to_string(),
            color: "#3b82f6".to_string(),
        }
    }

    #[test]
    fn checked_labels_keep_catalog_order() {
        let all = vec![label("news"), label("rust"), label("misc")];
        let checked = vec!["misc".to_string(), "news".to_string()];
        assert_eq!(combined_labels(&all, &checked, ""), vec!["news", "misc"]);
    }

    #[test]
    fn new_labels_append_without_duplicating_checked_ones() {
        let all = vec![label("news")];
        let checked = vec!["news".to_string()];
        assert_eq!(
            combined_labels(&all, &checked, "news, rust, rust"),
            vec!["news", "rust"]
        );
    }

    #[test]
    fn unchecked_catalog_labels_are_dropped() {
        let all = vec![label("news"), label("rust")];
        assert_eq!(combined_labels(&all, &[], "misc"), vec!["misc"]);
    }
}
