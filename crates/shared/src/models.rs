//! Wire models for the MyRSS server API.
//!
//! Field names and casing follow the server's JSON (snake_case, items
//! flattened together with their per-user read status). Timestamps are
//! RFC 3339 strings on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Feeds & subscriptions ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feed {
    pub id: Uuid,
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub last_fetched: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subscription {
    pub id: Uuid,
    pub feed_id: Uuid,
    pub custom_title: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A subscription as the feeds page consumes it: the subscription row
/// flattened together with display data for its feed and labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionWithLabels {
    #[serde(flatten)]
    pub subscription: Subscription,
    pub feed_title: Option<String>,
    pub feed_url: String,
    pub feed_description: Option<String>,
    pub last_fetched: Option<DateTime<Utc>>,
    pub labels: Vec<Label>,
}

impl SubscriptionWithLabels {
    /// Preferred display title: custom title, then feed title, then URL.
    pub fn display_title(&self) -> &str {
        self.subscription
            .custom_title
            .as_deref()
            .or(self.feed_title.as_deref())
            .unwrap_or(&self.feed_url)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Label {
    pub id: Uuid,
    pub name: String,
    pub color: String,
}

// --- Items ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub feed_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub link: Option<String>,
    pub pub_date: Option<DateTime<Utc>>,
    pub author: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemWithReadStatus {
    #[serde(flatten)]
    pub item: Item,
    pub is_read: bool,
    pub feed_title: Option<String>,
}

/// One page of the item timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemsPage {
    pub items: Vec<ItemWithReadStatus>,
    pub page: i64,
    pub has_more: bool,
}

// --- Request payloads ---

/// Payload for `POST /api/items/mark-read`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarkReadRequest {
    pub item_ids: Vec<Uuid>,
}

/// Payload for the add-feed form (`POST /feeds/add`, form-encoded).
///
/// `labels` holds the already-expanded label list; use [`parse_labels`]
/// to build it from the raw comma-separated input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddFeedRequest {
    pub url: Option<String>,
    pub content: Option<String>,
    pub labels: Vec<String>,
}

impl AddFeedRequest {
    /// Expand into form fields, repeating `labels` once per entry.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = Vec::new();
        if let Some(url) = self.url.as_deref().filter(|u| !u.is_empty()) {
            fields.push(("url".to_string(), url.to_string()));
        }
        if let Some(content) = self.content.as_deref().filter(|c| !c.is_empty()) {
            fields.push(("content".to_string(), content.to_string()));
        }
        for label in &self.labels {
            fields.push(("labels".to_string(), label.clone()));
        }
        fields
    }
}

// --- Form helpers ---

/// Split a raw comma-separated labels value into individual label names.
///
/// Entries are trimmed, empty entries dropped, and duplicates removed
/// keeping the first occurrence ("a, b, b" yields ["a", "b"]).
pub fn parse_labels(raw: &str) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() || labels.iter().any(|l| l == entry) {
            continue;
        }
        labels.push(entry.to_string());
    }
    labels
}

/// The add-feed form needs at least one source: a URL or pasted content.
pub fn has_feed_source(url: &str, content: &str) -> bool {
    !url.trim().is_empty() || !content.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_labels_trims_and_drops_empties() {
        assert_eq!(parse_labels("  rust , news,, "), vec!["rust", "news"]);
        assert!(parse_labels("").is_empty());
        assert!(parse_labels(" , ,").is_empty());
    }

    #[test]
    fn parse_labels_dedupes_keeping_first_occurrence() {
        assert_eq!(parse_labels("a, b, b"), vec!["a", "b"]);
        assert_eq!(parse_labels("b, a, b, a"), vec!["b", "a"]);
    }

    #[test]
    fn feed_source_requires_url_or_content() {
        assert!(!has_feed_source("", ""));
        assert!(!has_feed_source("   ", "\n"));
        assert!(has_feed_source("https://example.com/feed.xml", ""));
        assert!(has_feed_source("", "<rss></rss>"));
    }

    #[test]
    fn mark_read_request_serializes_item_ids() {
        let id = Uuid::parse_str("8e7a0c3e-2f4b-4c19-9d35-5d1f9a2b6c41").unwrap();
        let json = serde_json::to_value(MarkReadRequest { item_ids: vec![id] }).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "item_ids": ["8e7a0c3e-2f4b-4c19-9d35-5d1f9a2b6c41"] })
        );
    }

    #[test]
    fn item_with_read_status_parses_flattened_server_json() {
        let json = serde_json::json!({
            "id": "57a3f6be-9f0d-4d5f-8cfa-0b6f7f2d9a10",
            "feed_id": "2d5b1c7a-4e8f-49a1-b6d3-9c0e8f7a6b5c",
            "title": "Release notes",
            "description": "<p>Changes</p>",
            "link": "https://example.com/post",
            "pub_date": "2026-08-01T12:00:00Z",
            "author": "maintainers",
            "is_read": false,
            "feed_title": "Example Blog"
        });
        let parsed: ItemWithReadStatus = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.item.title, "Release notes");
        assert!(!parsed.is_read);
        assert_eq!(parsed.feed_title.as_deref(), Some("Example Blog"));
    }

    #[test]
    fn add_feed_form_fields_repeat_labels() {
        let request = AddFeedRequest {
            url: Some("https://example.com/feed.xml".to_string()),
            content: None,
            labels: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(
            request.form_fields(),
            vec![
                ("url".to_string(), "https://example.com/feed.xml".to_string()),
                ("labels".to_string(), "a".to_string()),
                ("labels".to_string(), "b".to_string()),
            ]
        );
    }
}
