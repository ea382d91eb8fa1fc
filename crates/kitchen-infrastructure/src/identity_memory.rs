//! In-memory identity provider.
//!
//! Stands in for the hosted identity service in tests and local runs. It
//! applies the same kinds of rejection the hosted provider does (malformed
//! email, weak password, duplicate account) and publishes session
//! transitions on a watch channel, one update per sign-in/sign-out.

use async_trait::async_trait;
use kitchen_core::{AccountRef, IdentityProvider, KitchenError, Result};
use std::collections::HashMap;
use tokio::sync::{RwLock, watch};
use uuid::Uuid;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone)]
struct StoredAccount {
    uid: String,
    password: String,
}

pub struct MemoryIdentityProvider {
    /// Registered accounts keyed by email.
    accounts: RwLock<HashMap<String, StoredAccount>>,
    /// External identity tokens accepted by `authenticate_with_token`.
    tokens: RwLock<HashMap<String, AccountRef>>,
    session_tx: watch::Sender<Option<AccountRef>>,
}

impl MemoryIdentityProvider {
    pub fn new() -> Self {
        let (session_tx, _) = watch::channel(None);
        Self {
            accounts: RwLock::new(HashMap::new()),
            tokens: RwLock::new(HashMap::new()),
            session_tx,
        }
    }

    /// Registers an external identity token that can later be exchanged
    /// for a session. The account behind the token gets a fresh uid.
    pub async fn register_token(
        &self,
        token: impl Into<String>,
        email: impl Into<String>,
        photo_url: Option<String>,
    ) -> AccountRef {
        let account = AccountRef {
            uid: Uuid::new_v4().to_string(),
            email: email.into(),
            photo_url,
        };
        self.tokens
            .write()
            .await
            .insert(token.into(), account.clone());
        account
    }

    fn validate_credentials(email: &str, password: &str) -> Result<()> {
        if !email.contains('@') {
            return Err(KitchenError::auth("The email address is badly formatted."));
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(KitchenError::auth(
                "Password should be at least 6 characters.",
            ));
        }
        Ok(())
    }

    fn sign_in(&self, account: AccountRef) -> AccountRef {
        self.session_tx.send_replace(Some(account.clone()));
        account
    }
}

impl Default for MemoryIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    async fn create_account(&self, email: &str, password: &str) -> Result<AccountRef> {
        Self::validate_credentials(email, password)?;
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(email) {
            return Err(KitchenError::auth(
                "The email address is already in use by another account.",
            ));
        }
        let stored = StoredAccount {
            uid: Uuid::new_v4().to_string(),
            password: password.to_string(),
        };
        accounts.insert(email.to_string(), stored.clone());
        drop(accounts);

        tracing::debug!(email, "created account");
        Ok(self.sign_in(AccountRef::new(stored.uid, email)))
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<AccountRef> {
        let accounts = self.accounts.read().await;
        match accounts.get(email) {
            Some(stored) if stored.password == password => {
                let account = AccountRef::new(stored.uid.clone(), email);
                drop(accounts);
                Ok(self.sign_in(account))
            }
            _ => Err(KitchenError::auth("Invalid login credentials.")),
        }
    }

    async fn authenticate_with_token(&self, token: &str) -> Result<AccountRef> {
        let tokens = self.tokens.read().await;
        match tokens.get(token) {
            Some(account) => {
                let account = account.clone();
                drop(tokens);
                Ok(self.sign_in(account))
            }
            None => Err(KitchenError::auth(
                "The supplied auth credential is malformed or has expired.",
            )),
        }
    }

    async fn end_session(&self) -> Result<()> {
        self.session_tx.send_replace(None);
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Option<AccountRef>> {
        self.session_tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_and_login_publish_session_transitions() {
        let provider = MemoryIdentityProvider::new();
        let rx = provider.subscribe();
        assert!(rx.borrow().is_none());

        let created = provider
            .create_account("ada@example.com", "password1")
            .await
            .unwrap();
        assert_eq!(rx.borrow().as_ref().unwrap().uid, created.uid);

        provider.end_session().await.unwrap();
        assert!(rx.borrow().is_none());

        let again = provider
            .authenticate("ada@example.com", "password1")
            .await
            .unwrap();
        assert_eq!(again.uid, created.uid);
        assert_eq!(rx.borrow().as_ref().unwrap().uid, created.uid);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let provider = MemoryIdentityProvider::new();
        provider
            .create_account("ada@example.com", "password1")
            .await
            .unwrap();
        let err = provider
            .create_account("ada@example.com", "password2")
            .await
            .unwrap_err();
        assert!(err.is_auth());
        assert!(err.to_string().contains("already in use"));
    }

    #[tokio::test]
    async fn malformed_credentials_are_rejected() {
        let provider = MemoryIdentityProvider::new();
        assert!(
            provider
                .create_account("not-an-email", "password1")
                .await
                .is_err()
        );
        assert!(
            provider
                .create_account("ada@example.com", "short")
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let provider = MemoryIdentityProvider::new();
        provider
            .create_account("ada@example.com", "password1")
            .await
            .unwrap();
        let err = provider
            .authenticate("ada@example.com", "wrong-password")
            .await
            .unwrap_err();
        assert!(err.is_auth());
    }

    #[tokio::test]
    async fn token_exchange_signs_in_the_mapped_account() {
        let provider = MemoryIdentityProvider::new();
        let mapped = provider
            .register_token("google-token", "ada@gmail.com", Some("https://p/ada.png".into()))
            .await;

        let account = provider.authenticate_with_token("google-token").await.unwrap();
        assert_eq!(account, mapped);
        assert_eq!(account.photo_url.as_deref(), Some("https://p/ada.png"));

        assert!(provider.authenticate_with_token("expired").await.is_err());
    }
}
