use thiserror::Error;
use serde::{Deserialize, Serialize};

/// One failed field check, as reported by the validation engine.
/// Recoverable by user correction, never raised as a panic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum Error {
    /* expected and normal business logic related errors that must be handled by the caller */

    /// The submitted fields failed client-side validation; nothing was sent.
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    /// The service answered `success: false` and gave a reason.
    #[error("{0}")]
    Rejected(String),

    /// An authorized call was attempted without a bootstrapped session.
    #[error("not logged in")]
    NotLoggedIn,

    /* Anything that went wrong between us and the service: unreachable host,
       non-JSON body, unexpected status. Intentionally collapsed into a single
       generic variant; the user is just told to retry, with no distinction
       between timeout, 4xx or 5xx. */
    #[error("server error, try again")]
    ServiceUnavailable,

    #[error("ClientSideError({0:#?})")]
    ClientSideError(#[from] eyre::Report),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_collapse_to_one_message() {
        assert_eq!(Error::ServiceUnavailable.to_string(), "server error, try again");
    }

    #[test]
    fn rejected_carries_the_service_reason() {
        let e = Error::Rejected("email already registered".into());
        assert_eq!(e.to_string(), "email already registered");
    }

    #[test]
    fn field_error_wire_shape() {
        let e = FieldError { field: "email".into(), message: "Email is required".into() };
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r#"{"field":"email","message":"Email is required"}"#);
    }
}
