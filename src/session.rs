//! Authenticated-session context.
//!
//! Many screens need to know who is signed in and which token to attach to
//! requests. Rather than ambient global state, an [`AuthContext`] is built
//! at session start and handed explicitly to each screen that needs it; its
//! lifecycle is login → (reads) → logout.

use serde::{Deserialize, Serialize};

use crate::remote::AuthResponse;
use crate::types::User;

/// A signed-in user plus the bearer token the transport layer attaches to
/// authenticated requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Session {
            user: response.user,
            token: response.token,
        }
    }
}

/// Holds the current session, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    session: Option<Session>,
}

impl AuthContext {
    /// Fresh context with nobody signed in.
    pub fn new() -> Self {
        AuthContext::default()
    }

    /// Install the session from a successful register/login response.
    pub fn login(&mut self, response: AuthResponse) {
        self.session = Some(Session::from(response));
    }

    /// Drop the session. The transport layer still owes the server a
    /// `POST /auth/logout`; this only clears client state.
    pub fn logout(&mut self) {
        self.session = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_response() -> AuthResponse {
        AuthResponse {
            user: User {
                id: Some("u1".to_string()),
                username: "maria".to_string(),
                email: "maria@example.com".to_string(),
            },
            token: "jwt-abc".to_string(),
        }
    }

    #[test]
    fn login_then_logout_lifecycle() {
        let mut ctx = AuthContext::new();
        assert!(!ctx.is_authenticated());
        assert_eq!(ctx.current_user(), None);

        ctx.login(auth_response());
        assert!(ctx.is_authenticated());
        assert_eq!(ctx.current_user().unwrap().username, "maria");
        assert_eq!(ctx.token(), Some("jwt-abc"));

        ctx.logout();
        assert!(!ctx.is_authenticated());
        assert_eq!(ctx.token(), None);
    }
}
