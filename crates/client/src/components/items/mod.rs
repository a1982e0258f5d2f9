//! Item timeline components.

pub mod item_row;
pub mod refresh_button;

pub use item_row::ItemRow;
pub use refresh_button::RefreshButton;
