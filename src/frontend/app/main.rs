//! Application routing system.

use crate::frontend::app::guard::{Guarded, RouteRule};
use crate::frontend::pages::home::HomePage;
use crate::frontend::pages::login::LoginPage;
use crate::frontend::pages::settings::SettingsPage;
use crate::frontend::services::session::use_session_provider;
use crate::frontend::services::theme::{ThemePreference, use_theme_provider};

use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

#[component]
pub fn Login() -> Element {
    rsx! { LoginPage {} }
}

#[component]
pub fn Home() -> Element {
    rsx! { HomePage {} }
}

#[component]
pub fn Settings() -> Element {
    rsx! { SettingsPage {} }
}

/// Guest-only gate: wraps routes that must not be visible to a signed-in
/// user. Additional gates (for example an authenticated-only one) are new
/// layout components with their own rule list.
#[component]
fn GuestGate() -> Element {
    rsx! {
        Guarded { rules: vec![RouteRule::RequireGuest] }
    }
}

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
pub enum Route {
    /// Login page, reachable only while signed out.
    #[layout(GuestGate)]
    #[route("/login")]
    Login {},
    #[end_layout]
    /// Landing page.
    #[route("/")]
    Home {},
    /// Appearance settings page.
    #[route("/settings")]
    Settings {},
}

/// Application root: installs the state holders, then hands off to the
/// router.
#[component]
pub fn App() -> Element {
    use_session_provider();
    use_theme_provider(ThemePreference::System);

    rsx! { Router::<Route> {} }
}
