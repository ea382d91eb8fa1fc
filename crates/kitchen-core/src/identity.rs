//! Identity provider boundary.

use crate::account::AccountRef;
use crate::error::Result;
use async_trait::async_trait;
use tokio::sync::watch;

/// An abstract identity provider.
///
/// Issues stable per-account identifiers and reports session transitions.
/// All rejections surface as [`crate::KitchenError::Auth`] with the
/// provider's own message, which callers display to the user unmodified.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Creates a new account from email/password credentials.
    ///
    /// The provider decides what to reject (malformed email, weak password,
    /// duplicate account). A successful creation also signs the account in.
    async fn create_account(&self, email: &str, password: &str) -> Result<AccountRef>;

    /// Signs in with email/password credentials.
    async fn authenticate(&self, email: &str, password: &str) -> Result<AccountRef>;

    /// Exchanges a third-party identity token for a session.
    async fn authenticate_with_token(&self, token: &str) -> Result<AccountRef>;

    /// Ends the current session.
    async fn end_session(&self) -> Result<()>;

    /// Subscribes to session-state changes.
    ///
    /// The receiver holds the current account (or `None`) immediately on
    /// subscription and observes one update per sign-in/sign-out
    /// transition.
    fn subscribe(&self) -> watch::Receiver<Option<AccountRef>>;
}
