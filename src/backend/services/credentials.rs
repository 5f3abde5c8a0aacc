//! Credential checks against the account service.
//!
//! The account service is not wired up yet, so both calls are fixed-delay
//! stubs that resolve to a signed-out answer. The session holder only relies
//! on "resolves eventually to a boolean or fails", which keeps this the
//! single seam to replace once the real backend exists.

use std::time::Duration;

use anyhow::Result;
use tokio::time::sleep;

/// How long the stubbed session restore takes.
const RESTORE_DELAY: Duration = Duration::from_millis(1500);

/// How long the stubbed sign-in takes.
const SIGN_IN_DELAY: Duration = Duration::from_millis(700);

/// Checks whether a stored session token is still valid.
///
/// TODO: replace with a token check against the account service.
pub async fn restore_session() -> Result<bool> {
    sleep(RESTORE_DELAY).await;
    Ok(false)
}

/// Verifies a credential pair. Rejects everything until the account service
/// is connected.
pub async fn sign_in(_email: &str, _password: &str) -> Result<bool> {
    sleep(SIGN_IN_DELAY).await;
    Ok(false)
}
