//! Feed management components.

pub mod add_feed_form;
pub mod label_edit_modal;
pub mod subscription_card;

pub use add_feed_form::AddFeedForm;
pub use label_edit_modal::LabelEditModal;
pub use subscription_card::SubscriptionCard;
