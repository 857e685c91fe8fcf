use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 100;
const SPECIAL_CHARS: &str = "@$!%*?&";

/// Length plus upper / lower / digit / special character classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrengthPasswordPolicy;

impl PasswordPolicy for StrengthPasswordPolicy {
    fn violations(&self, password: &str) -> Vec<PasswordPolicyError> {
        let mut errors = Vec::new();
        let len = password.chars().count();

        if len < MIN_PASSWORD_LEN {
            errors.push(PasswordPolicyError::TooShort);
        }
        if len > MAX_PASSWORD_LEN {
            errors.push(PasswordPolicyError::TooLong);
        }
        if !password.chars().any(|c| c.is_uppercase()) {
            errors.push(PasswordPolicyError::MissingUppercase);
        }
        if !password.chars().any(|c| c.is_lowercase()) {
            errors.push(PasswordPolicyError::MissingLowercase);
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            errors.push(PasswordPolicyError::MissingDigit);
        }
        if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
            errors.push(PasswordPolicyError::MissingSpecial);
        }

        errors
    }
}
