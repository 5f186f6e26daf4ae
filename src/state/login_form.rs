use std::collections::BTreeSet;

use crate::models::{LoginCredentials, SessionRecord};
use crate::validation::{validate_credentials, validate_login_field, FieldErrors, LoginField};

/// Values, validation state and in-flight flag of the login screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginFormState {
    credentials: LoginCredentials,
    touched: BTreeSet<LoginField>,
    errors: FieldErrors<LoginField>,
    submitting: bool,
}

impl LoginFormState {
    pub fn credentials(&self) -> &LoginCredentials {
        &self.credentials
    }

    pub fn error_for(&self, field: LoginField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Logging in..."
        } else {
            "Login"
        }
    }

    pub fn set_field(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Username => self.credentials.username = value,
            LoginField::Password => self.credentials.password = value,
        }
        if self.touched.contains(&field) {
            self.revalidate(field);
        }
    }

    pub fn touch(&mut self, field: LoginField) {
        self.touched.insert(field);
        self.revalidate(field);
    }

    fn revalidate(&mut self, field: LoginField) {
        match validate_login_field(&self.credentials, field) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    /// Validates both fields. On success the form enters the submitting
    /// state and returns the session record to persist.
    ///
    /// Returns `None` while a submit is already in flight.
    pub fn submit(&mut self, timestamp: i64) -> Option<SessionRecord> {
        if self.submitting {
            return None;
        }

        self.touched.extend(LoginField::ALL);
        self.errors = validate_credentials(&self.credentials);
        if !self.errors.is_empty() {
            return None;
        }

        self.submitting = true;
        Some(SessionRecord::new(self.credentials.username.clone(), timestamp))
    }

    pub fn finish(&mut self) {
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled(username: &str, password: &str) -> LoginFormState {
        let mut form = LoginFormState::default();
        form.set_field(LoginField::Username, username.to_string());
        form.set_field(LoginField::Password, password.to_string());
        form
    }

    #[test]
    fn short_username_blocks_submit() {
        let mut form = filled("ab", "123456");

        assert_eq!(form.submit(1), None);
        assert_eq!(
            form.error_for(LoginField::Username),
            Some("Username must be at least 3 characters")
        );
        assert_eq!(form.error_for(LoginField::Password), None);
        assert!(!form.is_submitting());
    }

    #[test]
    fn valid_credentials_produce_session_record() {
        let mut form = filled("abc", "123456");

        let record = form.submit(1_700_000_000_000);

        assert_eq!(record, Some(SessionRecord::new("abc", 1_700_000_000_000)));
        assert!(form.is_submitting());
        assert_eq!(form.submit_label(), "Logging in...");
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut form = filled("abc", "123456");
        assert!(form.submit(1).is_some());
        assert_eq!(form.submit(2), None);

        form.finish();
        assert_eq!(form.submit_label(), "Login");
        assert!(form.submit(3).is_some());
    }

    #[test]
    fn edits_while_in_flight_keep_the_submitting_state() {
        let mut form = filled("abc", "123456");
        assert!(form.submit(1).is_some());

        form.set_field(LoginField::Username, "abcd".to_string());

        assert!(form.is_submitting());
        assert_eq!(form.credentials().username, "abcd");
        assert_eq!(form.submit_label(), "Logging in...");
    }

    #[test]
    fn blur_reveals_error_for_that_field_only() {
        let mut form = LoginFormState::default();

        form.touch(LoginField::Password);

        assert_eq!(form.error_for(LoginField::Password), Some("Password is required"));
        assert_eq!(form.error_for(LoginField::Username), None);

        form.set_field(LoginField::Password, "secret1".to_string());
        assert_eq!(form.error_for(LoginField::Password), None);
    }
}
