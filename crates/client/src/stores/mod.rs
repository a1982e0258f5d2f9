//! Global stores for application state.

pub mod items;
