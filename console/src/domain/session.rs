//! Explicit session identity for API calls.
//!
//! The original console read its user id and session flag from ambient
//! browser storage. Here the session is a value passed into whichever
//! adapter needs it, so call sites that require an authenticated user are
//! explicit about it and tests can inject any identity they like.

use std::fmt;

use zeroize::Zeroizing;

/// Domain error returned when session inputs are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionValidationError {
    /// User id was missing or blank once trimmed.
    EmptyUserId,
    /// Auth token was blank.
    EmptyToken,
}

impl fmt::Display for SessionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUserId => write!(f, "user id must not be empty"),
            Self::EmptyToken => write!(f, "auth token must not be empty"),
        }
    }
}

impl std::error::Error for SessionValidationError {}

/// Validated user identifier as the API expects it: a non-empty string.
///
/// ## Invariants
/// - The inner value is trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Construct a user id from a raw input.
    pub fn try_new(value: impl Into<String>) -> Result<Self, SessionValidationError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SessionValidationError::EmptyUserId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session identity carried into outbound adapters.
///
/// The token is zeroised on drop and redacted from debug output. Endpoints
/// that attach a `user_id` field read it from here rather than from any
/// global state.
#[derive(Clone)]
pub struct SessionContext {
    user_id: Option<UserId>,
    token: Option<Zeroizing<String>>,
}

impl SessionContext {
    /// Session with no identity; endpoints omit the `user_id` field.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            user_id: None,
            token: None,
        }
    }

    /// Session for a logged-in user.
    pub fn authenticated(
        user_id: UserId,
        token: impl Into<String>,
    ) -> Result<Self, SessionValidationError> {
        let token = token.into();
        if token.is_empty() {
            return Err(SessionValidationError::EmptyToken);
        }
        Ok(Self {
            user_id: Some(user_id),
            token: Some(Zeroizing::new(token)),
        })
    }

    /// Identifier of the logged-in user, when there is one.
    #[must_use]
    pub fn current_user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    /// Whether a session token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Borrow the auth token for request headers.
    #[must_use]
    pub fn auth_token(&self) -> Option<&str> {
        self.token.as_deref().map(String::as_str)
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("user_id", &self.user_id)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
