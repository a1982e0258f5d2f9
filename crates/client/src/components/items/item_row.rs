//! A single item in the timeline.

use dioxus::prelude::*;

use crate::components::ui::{Button, ButtonVariant};
use crate::date_format::relative_to_now;
use crate::log_error;
use crate::read_state::ReadStateSynchronizer;
use crate::stores::items::StoredItem;

/// One feed entry: title (linked when the item has one), meta line,
/// description, and the mark-read affordance while the item is unread.
///
/// Both opening the item and the explicit button mark it read; the
/// handlers are guarded so an already-read item never re-triggers the
/// call. The read flag itself only changes once the server confirms.
#[component]
pub fn ItemRow(item: StoredItem) -> Element {
    let sync = use_context::<ReadStateSynchronizer>();

    let mark_read = {
        let sync = sync.clone();
        let id = item.id;
        let is_read = item.is_read;
        move || {
            if is_read {
                return;
            }
            let sync = sync.clone();
            spawn(async move {
                if let Err(err) = sync.mark_read(vec![id]).await {
                    log_error!("failed to mark item {id} as read: {err}");
                }
            });
        }
    };
    let mark_read_on_open = mark_read.clone();

    let meta = item_meta(&item);

    rsx! {
        article {
            class: format!(
                "bg-white rounded-lg border border-gray-200 shadow-sm p-4 {}",
                if item.is_read { "opacity-60" } else { "" },
            ),
            div { class: "flex items-start justify-between gap-3",
                h3 { class: "text-lg font-semibold text-gray-900 leading-snug",
                    if let Some(link) = item.link.clone() {
                        a {
                            class: "hover:text-blue-700 hover:underline",
                            href: "{link}",
                            target: "_blank",
                            rel: "noopener",
                            onclick: move |_| mark_read_on_open(),
                            "{item.title}"
                        }
                    } else {
                        "{item.title}"
                    }
                }
                if !item.is_read {
                    Button {
                        variant: ButtonVariant::Secondary,
                        class: "flex-shrink-0 text-xs".to_string(),
                        onclick: move |_| mark_read(),
                        "Mark as Read"
                    }
                }
            }
            div { class: "text-xs text-gray-500 mt-1", "{meta}" }
            if let Some(description) = item.description.clone() {
                div {
                    class: "text-sm text-gray-700 mt-2 leading-relaxed",
                    dangerous_inner_html: "{description}",
                }
            }
        }
    }
}

fn item_meta(item: &StoredItem) -> String {
    let mut parts: Vec<String> = Vec::new();
    parts.push(
        item.feed_title
            .clone()
            .unwrap_or_else(|| "Unknown Feed".to_string()),
    );
    if let Some(published) = item.published_at {
        parts.push(relative_to_now(published));
    }
    if let Some(author) = &item.author {
        parts.push(format!("by {author}"));
    }
    parts.join(" \u{2022} ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn base_item() -> StoredItem {
        StoredItem {
            id: Uuid::parse_str("11111111-1111-4111-8111-111111111111").unwrap(),
            title: "A post".to_string(),
            link: None,
            description: None,
            author: None,
            feed_title: Some("Example Blog".to_string()),
            published_at: None,
            is_read: false,
        }
    }

    #[test]
    fn meta_line_joins_present_parts() {
        let mut item = base_item();
        item.author = Some("alice".to_string());
        assert_eq!(item_meta(&item), "Example Blog \u{2022} by alice");
    }

    #[test]
    fn meta_line_falls_back_for_unknown_feeds() {
        let mut item = base_item();
        item.feed_title = None;
        assert_eq!(item_meta(&item), "Unknown Feed");
    }
}
