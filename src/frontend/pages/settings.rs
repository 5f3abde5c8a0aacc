//! Appearance settings page.

use crate::frontend::services::theme::{ThemePreference, use_theme};
use dioxus::prelude::*;

const CHOICES: [(ThemePreference, &str); 3] = [
    (ThemePreference::Light, "Light"),
    (ThemePreference::Dark, "Dark"),
    (ThemePreference::System, "System"),
];

#[component]
pub fn SettingsPage() -> Element {
    let theme = use_theme();
    let resolved = theme.resolved().as_str();

    rsx! {
        div {
            class: "settings",
            h1 { "Settings" }
            section {
                class: "settings-appearance",
                h2 { "Appearance" }
                div {
                    class: "theme-choices",
                    for (preference, label) in CHOICES {
                        button {
                            class: if theme.theme() == preference { "theme-choice active" } else { "theme-choice" },
                            onclick: move |_| {
                                let mut theme = theme;
                                theme.set_theme(preference);
                            },
                            "{label}"
                        }
                    }
                }
                button {
                    class: "theme-toggle",
                    onclick: move |_| {
                        let mut theme = theme;
                        theme.toggle_theme();
                    },
                    "Toggle light/dark"
                }
                p {
                    class: "theme-current",
                    "Current theme: {resolved}"
                }
            }
        }
    }
}
