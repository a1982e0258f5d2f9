//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::{Feeds, Home, Navbar};

// Router configuration
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
        // Item timeline
        #[route("/")]
        Home {},

        // Subscription management
        #[route("/feeds")]
        Feeds {},
}
