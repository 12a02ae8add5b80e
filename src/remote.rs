//! Interface contract with the transport collaborator.
//!
//! The HTTP client itself lives outside this core. What lives here is
//! everything the core *owes* that boundary:
//!
//! - the wire shapes for auth, product CRUD, and image upload
//! - uniform extraction of a display message from the two error-body shapes
//!   the API produces (`{"errors": [{"msg": ...}]}` and `{"message": ...}`)
//! - the stale-response guard: a response that arrives after its screen was
//!   torn down (or superseded) must not be applied to fresh state
//!
//! Remote failures are terminal for the action that caused them: prior state
//! is left intact, the extracted message is surfaced, and retrying is the
//! user's call. Local [`crate::validate::FieldError`]s never get this far —
//! submission is blocked before a request exists.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::types::{Product, User};

// ============================================================================
// Wire shapes
// ============================================================================

/// `POST /auth/register` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of a successful register or login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// `GET /products` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

/// `POST /upload` body: the hosted URL of the uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

/// `DELETE /upload` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUploadRequest {
    pub public_id: String,
}

// ============================================================================
// Error surfacing
// ============================================================================

/// A failure surfaced from the transport collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The request never produced a response (connection refused, timeout).
    #[error("{0}")]
    Network(String),
    /// The server answered with a non-success status; `message` is already
    /// extracted and display-ready.
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl RemoteError {
    /// Build an [`RemoteError::Api`] from a response body, extracting the
    /// message via [`error_message`].
    pub fn from_response(status: u16, body: &Value, fallback: &str) -> Self {
        RemoteError::Api {
            status,
            message: error_message(body, fallback),
        }
    }
}

/// Extract a display message from an error body.
///
/// Preference order: the structured per-field array (entries joined with
/// `", "`), then a single `message` string, then the caller's generic
/// fallback. Malformed bodies therefore degrade to the fallback instead of
/// failing the failure path.
pub fn error_message(body: &Value, fallback: &str) -> String {
    if let Some(entries) = body.get("errors").and_then(Value::as_array) {
        let messages: Vec<&str> = entries.iter().filter_map(entry_message).collect();
        if !messages.is_empty() {
            return messages.join(", ");
        }
    }
    // Some endpoints put a plain string under `errors`
    if let Some(text) = body.get("errors").and_then(Value::as_str) {
        return text.to_string();
    }
    if let Some(message) = body.get("message").and_then(Value::as_str) {
        return message.to_string();
    }
    fallback.to_string()
}

/// One entry of the structured error array: either a bare string or an
/// object carrying `msg` (express-validator style) or `message`.
fn entry_message(entry: &Value) -> Option<&str> {
    entry
        .as_str()
        .or_else(|| entry.get("msg").and_then(Value::as_str))
        .or_else(|| entry.get("message").and_then(Value::as_str))
}

// ============================================================================
// Stale-response guard
// ============================================================================

/// Ticket identifying one outstanding request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Generation counter tying responses to the screen instance that asked.
///
/// A screen calls [`RequestTracker::begin`] when it fires a request and
/// checks [`RequestTracker::accept`] when the response lands. Anything that
/// makes earlier responses unwelcome — a newer request, or the screen going
/// away — bumps the generation, so stale tickets stop matching. Discards are
/// logged at WARN: a response outliving its screen is a real race, not
/// noise to swallow silently.
#[derive(Debug, Default)]
pub struct RequestTracker {
    current: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        RequestTracker::default()
    }

    /// Issue a ticket for a request about to be sent. Supersedes all
    /// previously issued tickets.
    pub fn begin(&mut self) -> Ticket {
        self.current += 1;
        Ticket(self.current)
    }

    /// Whether a response carrying `ticket` may be applied.
    pub fn accept(&self, ticket: Ticket) -> bool {
        let ok = ticket.0 == self.current;
        if !ok {
            warn!(
                ticket = ticket.0,
                current = self.current,
                "discarding stale response for a superseded or unmounted screen"
            );
        }
        ok
    }

    /// Invalidate every outstanding ticket, e.g. when the screen unmounts.
    pub fn invalidate(&mut self) {
        self.current += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // =========================================================================
    // Error-message extraction
    // =========================================================================

    #[test]
    fn field_errors_join_into_one_string() {
        let body = json!({
            "errors": [
                {"msg": "Email is already registered"},
                {"msg": "Username is taken"}
            ]
        });
        assert_eq!(
            error_message(&body, "Signup failed. Please try again."),
            "Email is already registered, Username is taken"
        );
    }

    #[test]
    fn errors_array_wins_over_message() {
        let body = json!({
            "errors": [{"msg": "Price must be positive"}],
            "message": "Validation failed"
        });
        assert_eq!(error_message(&body, "fallback"), "Price must be positive");
    }

    #[test]
    fn single_message_field() {
        let body = json!({"message": "Product not found"});
        assert_eq!(error_message(&body, "fallback"), "Product not found");
    }

    #[test]
    fn string_entries_and_message_keyed_entries_work() {
        let body = json!({"errors": ["broken", {"message": "also broken"}]});
        assert_eq!(error_message(&body, "fallback"), "broken, also broken");
    }

    #[test]
    fn errors_as_plain_string() {
        let body = json!({"errors": "everything is on fire"});
        assert_eq!(error_message(&body, "fallback"), "everything is on fire");
    }

    #[test]
    fn malformed_bodies_degrade_to_fallback() {
        for body in [
            json!({}),
            json!({"errors": []}),
            json!({"errors": [{"code": 42}]}),
            json!({"message": 500}),
            json!(null),
            json!("just text"),
        ] {
            assert_eq!(
                error_message(&body, "Failed to save product"),
                "Failed to save product"
            );
        }
    }

    #[test]
    fn api_error_displays_extracted_message() {
        let err = RemoteError::from_response(
            422,
            &json!({"errors": [{"msg": "Slug already in use"}]}),
            "Failed to save product",
        );
        assert_eq!(err.to_string(), "Slug already in use");
        assert_eq!(
            err,
            RemoteError::Api {
                status: 422,
                message: "Slug already in use".to_string()
            }
        );
    }

    // =========================================================================
    // Stale-response guard
    // =========================================================================

    #[test]
    fn current_ticket_is_accepted() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.begin();
        assert!(tracker.accept(ticket));
    }

    #[test]
    fn newer_request_supersedes_older_ticket() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(!tracker.accept(first));
        assert!(tracker.accept(second));
    }

    #[test]
    fn invalidate_rejects_all_outstanding_tickets() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.begin();
        tracker.invalidate();
        assert!(!tracker.accept(ticket));
    }

    // =========================================================================
    // Wire shapes
    // =========================================================================

    #[test]
    fn delete_upload_uses_camel_case() {
        let req = DeleteUploadRequest {
            public_id: "products/abc123".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"publicId":"products/abc123"}"#
        );
    }

    #[test]
    fn auth_response_parses() {
        let body = json!({
            "user": {"_id": "u1", "username": "maria", "email": "maria@example.com"},
            "token": "jwt-abc"
        });
        let parsed: AuthResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.user.username, "maria");
        assert_eq!(parsed.token, "jwt-abc");
    }
}
