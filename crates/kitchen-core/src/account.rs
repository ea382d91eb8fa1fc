//! Account reference issued by the identity provider.

use serde::{Deserialize, Serialize};

/// A signed-in account as reported by the identity provider.
///
/// The `uid` is the opaque stable identifier every per-account storage key
/// is derived from. The provider may also hand back a profile photo URL for
/// accounts created through an external token exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRef {
    /// Opaque stable account identifier.
    pub uid: String,
    /// Email address the account was registered with.
    pub email: String,
    /// Optional profile photo, present for external-token sign-ins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl AccountRef {
    pub fn new(uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
            photo_url: None,
        }
    }
}
