//! Theme state holder.
//!
//! Tracks the user preference (`light`, `dark` or `system`), resolves it to
//! a concrete theme, persists explicit choices and follows OS appearance
//! changes while the preference is `system`. The resolved value is applied
//! to the document root as both a class and a `data-theme` attribute so
//! stylesheets can key off either.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use dioxus::document;
use dioxus::prelude::*;
use dioxus_desktop::tao::event::{Event, WindowEvent};
use dioxus_desktop::tao::window::Theme as WindowTheme;
use dioxus_desktop::{use_window, use_wry_event_handler};
use serde::{Deserialize, Serialize};

use crate::backend::utils::paths::get_app_dir;

/// File the preference is persisted under, inside the app data directory.
const STORAGE_FILE: &str = "theme.json";

/// User-facing theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    System,
}

/// Concrete theme applied to the document. `system` is resolved away before
/// this type is ever produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Resolves a preference to a concrete theme. Explicit choices pass through;
/// `system` follows the OS signal.
fn resolve(preference: ThemePreference, system_dark: bool) -> ResolvedTheme {
    match preference {
        ThemePreference::Light => ResolvedTheme::Light,
        ThemePreference::Dark => ResolvedTheme::Dark,
        ThemePreference::System => {
            if system_dark {
                ResolvedTheme::Dark
            } else {
                ResolvedTheme::Light
            }
        }
    }
}

/// Persisted theme preference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub theme: ThemePreference,
}

impl ThemeConfig {
    /// Gets the path to the theme config file.
    pub fn get_config_path() -> PathBuf {
        get_app_dir()
            .unwrap_or_else(|_| PathBuf::from("NimbusMail"))
            .join(STORAGE_FILE)
    }

    /// Loads the stored preference. Absent or unreadable files yield `None`
    /// so the caller can fall back to its default.
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Option<Self> {
        let json = fs::read_to_string(path).ok()?;
        serde_json::from_str(&json).ok()
    }

    /// Saves the preference to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Theme context value. Copyable handle over the provider-owned signals.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeState {
    preference: Signal<ThemePreference>,
    system_dark: Signal<bool>,
    resolved: Signal<ResolvedTheme>,
}

impl ThemeState {
    pub fn theme(&self) -> ThemePreference {
        (self.preference)()
    }

    pub fn resolved(&self) -> ResolvedTheme {
        (self.resolved)()
    }

    /// Persists the preference and updates the state in the same call.
    /// A failed write is not fatal: the in-memory choice still applies for
    /// this run.
    pub fn set_theme(&mut self, next: ThemePreference) {
        if let Err(e) = (ThemeConfig { theme: next }).save() {
            log::warn!("Failed to persist theme preference: {e}");
        }
        self.preference.set(next);
        self.resolved.set(resolve(next, (self.system_dark)()));
    }

    /// Flips between light and dark based on the resolved theme. Never
    /// selects `system`.
    pub fn toggle_theme(&mut self) {
        self.set_theme(toggled(self.resolved()));
    }
}

/// The preference a toggle lands on: the opposite explicit theme.
const fn toggled(resolved: ResolvedTheme) -> ThemePreference {
    match resolved {
        ResolvedTheme::Dark => ThemePreference::Light,
        ResolvedTheme::Light => ThemePreference::Dark,
    }
}

/// Writes the theme marker onto the document root.
fn apply_document_theme(resolved: ResolvedTheme) {
    let theme = resolved.as_str();
    let _ = document::eval(&format!(
        "document.documentElement.classList.remove('light', 'dark'); \
         document.documentElement.classList.add('{theme}'); \
         document.documentElement.setAttribute('data-theme', '{theme}');"
    ));
}

/// Creates the theme state and provides it to all descendants.
///
/// Reads the stored preference (falling back to `default`), resolves it
/// against the current OS appearance and keeps following OS changes while
/// the preference is `system`.
pub fn use_theme_provider(default: ThemePreference) -> ThemeState {
    let window = use_window();

    let stored = use_hook(|| ThemeConfig::load().map_or(default, |config| config.theme));
    let initially_dark = use_hook(|| window.window.theme() == WindowTheme::Dark);

    let preference = use_signal(|| stored);
    let system_dark = use_signal(|| initially_dark);
    let resolved = use_signal(|| resolve(stored, initially_dark));

    // Re-apply the document marker after every resolved-theme change.
    use_effect(move || {
        apply_document_theme(resolved());
    });

    // OS appearance changes only matter while the preference is `system`;
    // explicit choices override the signal.
    use_wry_event_handler(move |event, _| {
        if let Event::WindowEvent {
            event: WindowEvent::ThemeChanged(os_theme),
            ..
        } = event
        {
            let dark = *os_theme == WindowTheme::Dark;
            let mut system_dark = system_dark;
            system_dark.set(dark);
            if *preference.peek() == ThemePreference::System {
                let mut resolved = resolved;
                resolved.set(resolve(ThemePreference::System, dark));
            }
        }
    });

    use_context_provider(|| ThemeState {
        preference,
        system_dark,
        resolved,
    })
}

/// Reads the theme state from context.
///
/// Panics when called outside `use_theme_provider`; a missing provider is an
/// integration mistake that must surface immediately.
pub fn use_theme() -> ThemeState {
    use_hook(|| {
        try_consume_context::<ThemeState>()
            .expect("use_theme must be called below use_theme_provider")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn explicit_preference_overrides_os_signal() {
        assert_eq!(resolve(ThemePreference::Light, true), ResolvedTheme::Light);
        assert_eq!(resolve(ThemePreference::Dark, false), ResolvedTheme::Dark);
    }

    #[test]
    fn system_preference_follows_os_signal() {
        assert_eq!(resolve(ThemePreference::System, true), ResolvedTheme::Dark);
        assert_eq!(resolve(ThemePreference::System, false), ResolvedTheme::Light);
    }

    #[test]
    fn toggle_never_selects_system() {
        assert_eq!(toggled(ResolvedTheme::Light), ThemePreference::Dark);
        assert_eq!(toggled(ResolvedTheme::Dark), ThemePreference::Light);
    }

    #[test]
    fn double_toggle_restores_resolved_theme() {
        for start in [ResolvedTheme::Light, ResolvedTheme::Dark] {
            // system_dark is irrelevant: a toggle always lands on an
            // explicit preference.
            let once = resolve(toggled(start), false);
            let twice = resolve(toggled(once), true);
            assert_eq!(twice, start);
        }
    }

    #[test]
    fn preference_serializes_as_lowercase_strings() {
        assert_eq!(
            serde_json::to_string(&ThemePreference::System).unwrap(),
            "\"system\""
        );
        let parsed: ThemePreference = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(parsed, ThemePreference::Dark);
    }

    #[test]
    fn config_round_trips_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.json");

        let config = ThemeConfig {
            theme: ThemePreference::Dark,
        };
        config.save_to(&path).unwrap();

        let loaded = ThemeConfig::load_from(&path).unwrap();
        assert_eq!(loaded.theme, ThemePreference::Dark);
    }

    #[test]
    fn missing_config_yields_none() {
        let dir = tempdir().unwrap();
        assert!(ThemeConfig::load_from(&dir.path().join("theme.json")).is_none());
    }

    #[test]
    fn corrupt_config_yields_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.json");
        fs::write(&path, "not json").unwrap();
        assert!(ThemeConfig::load_from(&path).is_none());
    }
}
