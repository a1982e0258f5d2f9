//! Shared types and utilities for the MyRSS client.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
