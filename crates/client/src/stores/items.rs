//! Global store for the item timeline.
//!
//! This store is the single source of truth for the currently loaded
//! page of items. Read flags in it move in one direction only: the
//! store-backed [`ReadStateSink`] flips them once the server has
//! confirmed a mark-read request, and `set_page` replaces the page
//! wholesale from a fresh fetch.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use myrss_shared::ItemWithReadStatus;
use uuid::Uuid;

use crate::read_state::ReadStateSink;

/// An item as the timeline renders it.
#[derive(Clone, PartialEq, Debug)]
pub struct StoredItem {
    pub id: Uuid,
    pub title: String,
    pub link: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub feed_title: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub is_read: bool,
}

impl From<ItemWithReadStatus> for StoredItem {
    fn from(value: ItemWithReadStatus) -> Self {
        Self {
            id: value.item.id,
            title: value.item.title,
            link: value.item.link,
            description: value.item.description,
            author: value.item.author,
            feed_title: value.feed_title,
            published_at: value.item.pub_date,
            is_read: value.is_read,
        }
    }
}

/// The currently loaded page of the timeline.
#[derive(Store, Default, Clone, PartialEq)]
pub struct ItemFeed {
    pub items: Vec<StoredItem>,
    pub page: i64,
    pub has_more: bool,
    /// Whether any page has been fetched yet.
    pub is_loaded: bool,
}

/// Global item store.
pub static ITEMS: GlobalStore<ItemFeed> = Global::new(ItemFeed::default);

impl ItemFeed {
    /// Replace the store contents with a freshly fetched page.
    pub fn set_page(&mut self, page: i64, items: Vec<StoredItem>, has_more: bool) {
        self.items = items;
        self.page = page;
        self.has_more = has_more;
        self.is_loaded = true;
    }

    /// Flip the read flag for the given items.
    ///
    /// Already-read and unknown ids are ignored. Returns the number of
    /// items that actually transitioned.
    pub fn mark_read(&mut self, item_ids: &[Uuid]) -> usize {
        let mut transitioned = 0;
        for item in &mut self.items {
            if !item.is_read && item_ids.contains(&item.id) {
                item.is_read = true;
                transitioned += 1;
            }
        }
        transitioned
    }
}

/// [`ReadStateSink`] backed by the global item store.
pub struct ItemStoreSink;

impl ReadStateSink for ItemStoreSink {
    fn apply_read(&self, item_ids: &[Uuid]) {
        ITEMS.resolve().write().mark_read(item_ids);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, is_read: bool) -> StoredItem {
        StoredItem {
            id: Uuid::parse_str(id).unwrap(),
            title: "title".to_string(),
            link: None,
            description: None,
            author: None,
            feed_title: None,
            published_at: None,
            is_read,
        }
    }

    const A: &str = "11111111-1111-4111-8111-111111111111";
    const B: &str = "22222222-2222-4222-8222-222222222222";

    #[test]
    fn set_page_replaces_contents_and_marks_loaded() {
        let mut feed = ItemFeed::default();
        assert!(!feed.is_loaded);

        feed.set_page(2, vec![item(A, false)], true);

        assert!(feed.is_loaded);
        assert_eq!(feed.page, 2);
        assert!(feed.has_more);
        assert_eq!(feed.items.len(), 1);
    }

    #[test]
    fn mark_read_flips_only_matching_unread_items() {
        let mut feed = ItemFeed::default();
        feed.set_page(1, vec![item(A, false), item(B, false)], false);

        let changed = feed.mark_read(&[Uuid::parse_str(A).unwrap()]);

        assert_eq!(changed, 1);
        assert!(feed.items[0].is_read);
        assert!(!feed.items[1].is_read);
    }

    #[test]
    fn mark_read_is_idempotent_per_item() {
        let mut feed = ItemFeed::default();
        feed.set_page(1, vec![item(A, false)], false);

        assert_eq!(feed.mark_read(&[Uuid::parse_str(A).unwrap()]), 1);
        assert_eq!(feed.mark_read(&[Uuid::parse_str(A).unwrap()]), 0);
        assert!(feed.items[0].is_read);
    }

    #[test]
    fn mark_read_ignores_unknown_ids() {
        let mut feed = ItemFeed::default();
        feed.set_page(1, vec![item(A, false)], false);

        assert_eq!(feed.mark_read(&[Uuid::parse_str(B).unwrap()]), 0);
        assert!(!feed.items[0].is_read);
    }
}
