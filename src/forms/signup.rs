//! Signup form: four fields, validated on change and again on submit.

use super::{FieldState, all_valid};
use crate::remote::RegisterRequest;
use crate::validate::{
    FieldError, validate_confirm_password, validate_email, validate_password, validate_username,
};

/// Account-creation form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: FieldState,
    pub email: FieldState,
    pub password: FieldState,
    pub confirm_password: FieldState,
}

impl SignupForm {
    pub fn new() -> Self {
        SignupForm::default()
    }

    pub fn set_username(&mut self, value: &str) -> bool {
        self.username.set(value, validate_username)
    }

    pub fn set_email(&mut self, value: &str) -> bool {
        self.email.set(value, validate_email)
    }

    pub fn set_password(&mut self, value: &str) -> bool {
        self.password.set(value, validate_password)
    }

    /// Confirm is checked against the password as it stands now; it is
    /// re-checked on submit in case the password changed afterwards.
    pub fn set_confirm_password(&mut self, value: &str) -> bool {
        let password = self.password.value.clone();
        self.confirm_password
            .set(value, |v| validate_confirm_password(&password, v))
    }

    /// Current composite validity (errors recorded so far).
    pub fn is_valid(&self) -> bool {
        all_valid(&[
            &self.username,
            &self.email,
            &self.password,
            &self.confirm_password,
        ])
    }

    /// Re-validate every field in display order and build the registration
    /// payload. Stops at the first failure, which is also recorded on its
    /// field.
    pub fn submit(&mut self) -> Result<RegisterRequest, FieldError> {
        self.username.error = validate_username(&self.username.value).err();
        if let Some(err) = self.username.error.clone() {
            return Err(err);
        }
        self.email.error = validate_email(&self.email.value).err();
        if let Some(err) = self.email.error.clone() {
            return Err(err);
        }
        self.password.error = validate_password(&self.password.value).err();
        if let Some(err) = self.password.error.clone() {
            return Err(err);
        }
        self.confirm_password.error =
            validate_confirm_password(&self.password.value, &self.confirm_password.value).err();
        if let Some(err) = self.confirm_password.error.clone() {
            return Err(err);
        }
        Ok(RegisterRequest {
            username: self.username.value.clone(),
            email: self.email.value.clone(),
            password: self.password.value.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignupForm {
        let mut form = SignupForm::new();
        form.set_username("maria");
        form.set_email("maria@example.com");
        form.set_password("Passw0rd");
        form.set_confirm_password("Passw0rd");
        form
    }

    #[test]
    fn valid_form_builds_register_payload() {
        let mut form = filled();
        let payload = form.submit().unwrap();
        assert_eq!(payload.username, "maria");
        assert_eq!(payload.email, "maria@example.com");
        assert_eq!(payload.password, "Passw0rd");
    }

    #[test]
    fn submit_stops_at_first_invalid_field() {
        let mut form = filled();
        form.username.value = String::new();
        form.email.value = "broken".to_string();
        assert_eq!(form.submit(), Err(FieldError::UsernameRequired));
        // The email error is not reached or recorded yet.
        assert_eq!(form.username.error, Some(FieldError::UsernameRequired));
        assert_eq!(form.email.error, None);
    }

    #[test]
    fn confirm_mismatch_found_at_submit_after_password_change() {
        let mut form = filled();
        // Password edited after confirm was validated; the stale agreement
        // must not survive submission.
        form.set_password("Different1");
        assert_eq!(form.submit(), Err(FieldError::PasswordMismatch));
        assert_eq!(
            form.confirm_password.error,
            Some(FieldError::PasswordMismatch)
        );
    }

    #[test]
    fn change_validation_updates_field_errors() {
        let mut form = SignupForm::new();
        assert!(!form.set_email("nope"));
        assert_eq!(form.email.error, Some(FieldError::EmailInvalid));
        assert!(!form.is_valid());
        assert!(form.set_email("ok@example.com"));
        assert_eq!(form.email.error, None);
    }
}
