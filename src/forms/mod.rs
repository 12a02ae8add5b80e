//! Form-state machines built on the validators in [`crate::validate`].
//!
//! Each screen owns one form value. Setters feed raw input text in and run
//! the matching validator immediately (validate-on-change); `submit` re-runs
//! the full rule set and either returns the wire payload or the first
//! failure. A failed submit never produces a payload, so local validation
//! errors cannot reach the transport layer.

pub mod product;
pub mod signup;

use crate::validate::FieldError;

/// One input's state: the current text plus its validation verdict.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<FieldError>,
}

impl FieldState {
    pub fn new(value: impl Into<String>) -> Self {
        FieldState {
            value: value.into(),
            error: None,
        }
    }

    /// Store a new value and validate it in one step. Returns whether the
    /// value passed.
    pub fn set<V>(&mut self, value: &str, validator: V) -> bool
    where
        V: FnOnce(&str) -> Result<(), FieldError>,
    {
        self.value = value.to_string();
        self.error = validator(&self.value).err();
        self.error.is_none()
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Composite form validity: every field free of errors.
pub fn all_valid(fields: &[&FieldState]) -> bool {
    fields.iter().all(|f| f.is_valid())
}
