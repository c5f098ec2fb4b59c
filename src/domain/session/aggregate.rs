//! Browser session entity.
//!
//! Tracks the simulated login and the age gate for the current visitor.
//! There is no real authentication: any non-empty email/password pair
//! is accepted.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{require, ValidationError};

/// Data kept about a logged-in visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub email: String,
}

/// Login state of the visitor.
///
/// User data only exists while authenticated, so "logged in" and
/// "has user data" can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoginState {
    #[default]
    Anonymous,
    Authenticated(UserData),
}

/// Session flags for the current visitor.
///
/// # Invariants
///
/// - `user_data()` is `Some` iff `is_logged_in()` is true
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    login: LoginState,
    age_verified: bool,
}

impl Session {
    /// Creates an anonymous, unverified session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstitutes a session from persisted parts.
    pub fn reconstitute(login: LoginState, age_verified: bool) -> Self {
        Self {
            login,
            age_verified,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn login_state(&self) -> &LoginState {
        &self.login
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.login, LoginState::Authenticated(_))
    }

    pub fn user_data(&self) -> Option<&UserData> {
        match &self.login {
            LoginState::Authenticated(data) => Some(data),
            LoginState::Anonymous => None,
        }
    }

    pub fn age_verified(&self) -> bool {
        self.age_verified
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Simulated login.
    ///
    /// # Errors
    ///
    /// - `MissingField` if email or password is empty
    pub fn login(&mut self, email: &str, password: &str) -> Result<UserData, ValidationError> {
        require("email", email)?;
        require("password", password)?;

        let user = UserData {
            email: email.trim().to_string(),
        };
        self.login = LoginState::Authenticated(user.clone());
        Ok(user)
    }

    /// Ends the simulated login. Returns whether a visitor was logged in.
    pub fn logout(&mut self) -> bool {
        let was_logged_in = self.is_logged_in();
        self.login = LoginState::Anonymous;
        was_logged_in
    }

    /// Records the outcome of the age gate.
    pub fn set_age_verified(&mut self, verified: bool) {
        self.age_verified = verified;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_anonymous_and_unverified() {
        let session = Session::new();
        assert!(!session.is_logged_in());
        assert!(session.user_data().is_none());
        assert!(!session.age_verified());
    }

    #[test]
    fn login_sets_user_data() {
        let mut session = Session::new();
        let user = session.login("ana@example.com", "secret").unwrap();

        assert_eq!(user.email, "ana@example.com");
        assert!(session.is_logged_in());
        assert_eq!(session.user_data(), Some(&user));
    }

    #[test]
    fn login_rejects_empty_email() {
        let mut session = Session::new();
        let err = session.login("", "secret").unwrap_err();
        assert_eq!(err, ValidationError::missing_field("email"));
        assert!(!session.is_logged_in());
    }

    #[test]
    fn login_rejects_empty_password() {
        let mut session = Session::new();
        let err = session.login("ana@example.com", "  ").unwrap_err();
        assert_eq!(err, ValidationError::missing_field("password"));
    }

    #[test]
    fn logout_clears_user_data() {
        let mut session = Session::new();
        session.login("ana@example.com", "secret").unwrap();

        assert!(session.logout());
        assert!(!session.is_logged_in());
        assert!(session.user_data().is_none());
    }

    #[test]
    fn logout_when_anonymous_reports_false() {
        let mut session = Session::new();
        assert!(!session.logout());
    }

    #[test]
    fn age_flag_is_independent_of_login() {
        let mut session = Session::new();
        session.set_age_verified(true);
        session.login("ana@example.com", "secret").unwrap();
        session.logout();
        assert!(session.age_verified());
    }
}
