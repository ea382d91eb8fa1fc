//! Shared screen-boundary types.

/// Gate wrapping every operation that needs a signed-in account.
///
/// Screens receiving `RequiresLogin` redirect to sign-in before retrying;
/// they never see a partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenGate<T> {
    Ready(T),
    RequiresLogin,
}

impl<T> ScreenGate<T> {
    /// The inner value, if the gate passed.
    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::RequiresLogin => None,
        }
    }

    pub fn requires_login(&self) -> bool {
        matches!(self, Self::RequiresLogin)
    }
}
