//! MyRSS Client - Dioxus web application
//!
//! This crate contains the web/desktop client for MyRSS, a personal
//! RSS reader served by the myrss-server HTTP API.

pub mod api_client;
pub mod browser;
pub mod date_format;
pub mod logging;
pub mod read_state;

pub mod components;
pub mod routes;
pub mod stores;
pub mod views;

pub use api_client::ApiClient;
pub use read_state::{MarkReadError, ReadStateSynchronizer};
pub use routes::Route;
