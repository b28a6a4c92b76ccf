pub mod core;
pub mod pwned;
pub mod validation;

mod rpc_client;

pub use validation::{
    password_strength, validate_email, validate_login, validate_password,
    validate_registration, validate_username, FieldResult, FormErrors, PasswordResult,
    PasswordStrength, StrengthLevel, StrengthReport,
};
