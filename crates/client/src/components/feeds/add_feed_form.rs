//! The add-feed form.

use dioxus::prelude::*;
use myrss_shared::{has_feed_source, parse_labels, user_message, AddFeedRequest};
use url::Url;

use crate::components::ui::{Button, ButtonVariant, InputType, TextInput};
use crate::ApiClient;

/// Subscribe to a new feed by URL or by pasted RSS content.
///
/// Submission is blocked with a visible message unless at least one of
/// the two sources is provided; a provided URL must also parse. The
/// comma-separated labels value is expanded into individual entries
/// before the form is posted.
#[component]
pub fn AddFeedForm(on_added: EventHandler<()>) -> Element {
    let api = use_context::<ApiClient>();
    let mut url = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut labels_raw = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();

        let url_value = url.read().trim().to_string();
        let content_value = content.read().trim().to_string();

        if !has_feed_source(&url_value, &content_value) {
            error.set(Some("Please provide a URL or RSS content".to_string()));
            return;
        }
        if !url_value.is_empty() && Url::parse(&url_value).is_err() {
            error.set(Some("The feed URL is not a valid URL".to_string()));
            return;
        }

        let request = AddFeedRequest {
            url: (!url_value.is_empty()).then_some(url_value),
            content: (!content_value.is_empty()).then_some(content_value),
            labels: parse_labels(&labels_raw.read()),
        };

        is_submitting.set(true);
        let api = api.clone();
        let on_added = on_added.clone();
        spawn(async move {
            match api.add_feed(&request).await {
                Ok(()) => {
                    url.set(String::new());
                    content.set(String::new());
                    labels_raw.set(String::new());
                    error.set(None);
                    on_added.call(());
                }
                Err(err) => {
                    error.set(Some(user_message(&err)));
                }
            }
            is_submitting.set(false);
        });
    };

    rsx! {
        form { class: "space-y-4", onsubmit: handle_submit,
            div {
                label { class: "block text-sm font-medium text-gray-700 mb-1", "Feed URL" }
                TextInput {
                    value: url.read().clone(),
                    input_type: InputType::Url,
                    placeholder: "https://example.com/feed.xml",
                    oninput: move |e: FormEvent| {
                        url.set(e.value());
                        error.set(None);
                    },
                }
            }
            div {
                label { class: "block text-sm font-medium text-gray-700 mb-1",
                    "Or paste RSS/XML content"
                }
                textarea {
                    class: "w-full rounded-md bg-white text-gray-900 px-3 py-2 text-sm border border-gray-300 placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-blue-500/50 focus:border-blue-500 min-h-[120px] resize-y",
                    placeholder: "Paste RSS XML content here if you have it",
                    value: "{content}",
                    oninput: move |e: FormEvent| {
                        content.set(e.value());
                        error.set(None);
                    },
                }
            }
            div {
                label { class: "block text-sm font-medium text-gray-700 mb-1",
                    "Labels (comma-separated, optional)"
                }
                TextInput {
                    value: labels_raw.read().clone(),
                    placeholder: "technology, news",
                    oninput: move |e: FormEvent| labels_raw.set(e.value()),
                }
            }
            if let Some(err) = error.read().as_ref() {
                div { class: "p-3 bg-red-50 border border-red-200 rounded-md text-red-700 text-sm",
                    "{err}"
                }
            }
            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit".to_string(),
                disabled: *is_submitting.read(),
                if *is_submitting.read() {
                    "Adding..."
                } else {
                    "Add Feed"
                }
            }
        }
    }
}
