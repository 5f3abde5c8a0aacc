//! Session state holder.
//!
//! Holds the authentication status of the running instance. The state starts
//! as "loading, signed out", and is mutated exactly once when the credential
//! check settles. Consumers only get read access; the signals never leave
//! this module.

use crate::backend::services::credentials;
use dioxus::prelude::*;

/// Point-in-time view of the session, detached from the reactive runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub is_authenticated: bool,
    pub is_loading: bool,
}

/// Session context value. Copyable handle over the provider-owned signals.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionState {
    is_authenticated: Signal<bool>,
    is_loading: Signal<bool>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        (self.is_authenticated)()
    }

    pub fn is_loading(&self) -> bool {
        (self.is_loading)()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            is_authenticated: self.is_authenticated(),
            is_loading: self.is_loading(),
        }
    }
}

/// Creates the session state and provides it to all descendants.
///
/// Spawns the one-shot credential check. The future belongs to this scope,
/// so tearing the provider down before it settles drops the task and no
/// late write can happen. A failed check resolves to signed out instead of
/// leaving the loading flag stuck.
pub fn use_session_provider() -> SessionState {
    let mut is_authenticated = use_signal(|| false);
    let mut is_loading = use_signal(|| true);

    use_future(move || async move {
        let authenticated = match credentials::restore_session().await {
            Ok(authenticated) => authenticated,
            Err(e) => {
                log::warn!("Session restore failed, treating as signed out: {e}");
                false
            }
        };
        is_authenticated.set(authenticated);
        is_loading.set(false);
    });

    use_context_provider(|| SessionState {
        is_authenticated,
        is_loading,
    })
}

/// Reads the session state from context.
///
/// Panics when called outside `use_session_provider`; a missing provider is
/// an integration mistake that must surface immediately.
pub fn use_session() -> SessionState {
    use_hook(|| {
        try_consume_context::<SessionState>()
            .expect("use_session must be called below use_session_provider")
    })
}
