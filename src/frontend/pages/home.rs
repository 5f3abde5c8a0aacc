//! Landing page.

use crate::frontend::app::main::Route;
use dioxus::prelude::*;
use dioxus_router::components::Link;

#[component]
pub fn HomePage() -> Element {
    rsx! {
        div {
            class: "home",
            h1 { "Nimbus Mail" }
            p {
                class: "home-subtitle",
                "Your inbox will appear here once you sign in."
            }
            nav {
                class: "home-links",
                Link { to: Route::Login {}, "Sign in" }
                Link { to: Route::Settings {}, "Settings" }
            }
        }
    }
}
