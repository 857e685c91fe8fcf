pub mod strength_password_policy;

pub use strength_password_policy::StrengthPasswordPolicy;
