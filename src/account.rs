use std::sync::LazyLock;
use regex::Regex;
use crate::error::KioskError;

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$").expect("email pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountMode {
    #[default]
    Register,
    ResetPassword,
}

/// Fields of the login screen.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub pending: bool,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(String, String), KioskError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(KioskError::validation("Email and password are required"));
        }
        Ok((email.to_string(), self.password.clone()))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Registration / password-reset form.
#[derive(Debug, Clone, Default)]
pub struct AccountForm {
    pub mode: AccountMode,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub password_repeat: String,
    pub error: Option<String>,
    pub success: Option<String>,
    pub pending: bool,
}

/// Validated payload ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRequest {
    pub mode: AccountMode,
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl AccountForm {
    pub fn validate(&self) -> Result<AccountRequest, KioskError> {
        let full_name = self.full_name.trim();
        if self.mode == AccountMode::Register && full_name.is_empty() {
            return Err(KioskError::validation("Please enter your full name"));
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(KioskError::validation("Email is required"));
        }
        if !EMAIL_RE.is_match(email) {
            return Err(KioskError::validation("Email address is not valid"));
        }

        if self.password != self.password_repeat {
            return Err(KioskError::validation("Passwords do not match!"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(KioskError::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        Ok(AccountRequest {
            mode: self.mode,
            full_name: full_name.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
        })
    }

    /// Switching mode keeps nothing from the other form.
    pub fn switch_mode(&mut self, mode: AccountMode) {
        *self = Self { mode, ..Self::default() };
    }

    pub fn clear_inputs(&mut self) {
        self.full_name.clear();
        self.email.clear();
        self.password.clear();
        self.password_repeat.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> AccountForm {
        AccountForm {
            full_name: "Admin One".into(),
            email: "admin@school.ac.th".into(),
            password: "secret1".into(),
            password_repeat: "secret1".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_registration_passes() {
        let request = filled().validate().unwrap();
        assert_eq!(request.email, "admin@school.ac.th");
        assert_eq!(request.mode, AccountMode::Register);
    }

    #[test]
    fn mismatched_passwords_are_caught_locally() {
        let form = AccountForm { password_repeat: "secret2".into(), ..filled() };
        assert_eq!(form.validate().unwrap_err().to_string(), "Passwords do not match!");
    }

    #[test]
    fn short_password_is_rejected() {
        let form = AccountForm { password: "abc".into(), password_repeat: "abc".into(), ..filled() };
        assert!(form.validate().unwrap_err().to_string().contains("at least 6"));
    }

    #[test]
    fn reset_does_not_need_a_name() {
        let form = AccountForm { mode: AccountMode::ResetPassword, full_name: String::new(), ..filled() };
        assert!(form.validate().is_ok());
        let form = AccountForm { full_name: String::new(), ..filled() };
        assert!(form.validate().is_err());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let form = AccountForm { email: "admin@school".into(), ..filled() };
        assert!(matches!(form.validate(), Err(KioskError::Validation(_))));
    }

    #[test]
    fn login_requires_both_fields() {
        let form = LoginForm { email: " admin@school.ac.th ".into(), ..Default::default() };
        assert!(form.validate().is_err());
        let form = LoginForm { password: "x".into(), ..form };
        assert_eq!(form.validate().unwrap().0, "admin@school.ac.th");
    }
}
