pub trait PasswordPolicy: Send + Sync {
    /// Every rule the password breaks, empty when it is acceptable.
    fn violations(&self, password: &str) -> Vec<PasswordPolicyError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PasswordPolicyError {
    #[error("must be at least 8 characters")]
    TooShort,

    #[error("must be at most 100 characters")]
    TooLong,

    #[error("must contain an uppercase letter")]
    MissingUppercase,

    #[error("must contain a lowercase letter")]
    MissingLowercase,

    #[error("must contain a digit")]
    MissingDigit,

    #[error("must contain a special character (@$!%*?&)")]
    MissingSpecial,
}
