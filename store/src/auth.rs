//! Authentication/session state.

/// Who is signed in, if anyone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Whether the login view shows the signup form.
    pub is_signup: bool,
    pub is_logged_in: bool,
    pub user_email: String,
    pub user_id: String,
}

impl AuthState {
    pub fn set_is_signup(&mut self, is_signup: bool) {
        self.is_signup = is_signup;
    }

    /// Record a successful login.
    pub fn set_login(&mut self, email: impl Into<String>, user_id: impl Into<String>) {
        self.is_logged_in = true;
        self.user_email = email.into();
        self.user_id = user_id.into();
    }

    pub fn logout(&mut self) {
        self.is_logged_in = false;
        self.user_email.clear();
        self.user_id.clear();
    }

    pub fn set_user_email(&mut self, email: impl Into<String>) {
        self.user_email = email.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_logout_cycle() {
        let mut auth = AuthState::default();
        assert!(!auth.is_logged_in);

        auth.set_login("user@example.com", "u-42");
        assert!(auth.is_logged_in);
        assert_eq!(auth.user_email, "user@example.com");
        assert_eq!(auth.user_id, "u-42");

        auth.logout();
        assert!(!auth.is_logged_in);
        assert!(auth.user_email.is_empty());
        assert!(auth.user_id.is_empty());
    }

    #[test]
    fn test_signup_flag_independent_of_session() {
        let mut auth = AuthState::default();
        auth.set_is_signup(true);
        auth.set_login("user@example.com", "u-42");
        assert!(auth.is_signup);
    }
}
