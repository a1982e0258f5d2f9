//! Site chrome: header navigation, content outlet, footer.

use dioxus::prelude::*;

use crate::Route;

/// Layout wrapping every page: the MyRSS header, the routed content,
/// and the footer.
#[component]
pub fn Navbar() -> Element {
    let route: Route = use_route();

    let link_class = |active: bool| {
        if active {
            "text-sm font-medium text-blue-700"
        } else {
            "text-sm font-medium text-gray-600 hover:text-blue-700"
        }
    };

    rsx! {
        div { class: "min-h-screen flex flex-col bg-gray-50",
            header { class: "bg-white border-b border-gray-200",
                div { class: "max-w-3xl mx-auto px-4 py-3 flex items-center justify-between",
                    Link { to: Route::Home {}, class: "text-xl font-bold text-gray-900",
                        "MyRSS"
                    }
                    nav { class: "flex items-center gap-4",
                        Link {
                            to: Route::Home {},
                            class: link_class(matches!(route, Route::Home {})),
                            "Home"
                        }
                        Link {
                            to: Route::Feeds {},
                            class: link_class(matches!(route, Route::Feeds {})),
                            "Manage Feeds"
                        }
                    }
                }
            }
            main { class: "flex-1 max-w-3xl w-full mx-auto px-4 py-6",
                Outlet::<Route> {}
            }
            footer { class: "border-t border-gray-200 bg-white",
                div { class: "max-w-3xl mx-auto px-4 py-3 text-xs text-gray-400",
                    "MyRSS - Your personal RSS reader"
                }
            }
        }
    }
}
