//! Errors produced by the status machinery.
//!
//! [`HttpError`] is the deliberate output of [`Status::error`](crate::Status::error):
//! an error value representing an HTTP-error-worthy condition, carrying the numeric
//! code so callers can branch on it programmatically. [`NotAnError`] is the refusal
//! returned when `error()` is asked of a status that is not error‐classified.

use thiserror::Error;

/// An error built from an error‐classified [`Status`](crate::Status).
///
/// The message is the status's string form followed by the resolved message body,
/// e.g. `404 (Not Found) Client Error`.
///
/// ```rust
/// # use httpstatus::Status;
/// let err = Status::new(404).error().unwrap();
/// assert_eq!(err.code(), 404);
/// assert_eq!(err.to_string(), "404 (Not Found) Client Error");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HttpError {
    code: u16,
    message: String,
}

impl HttpError {
    pub(crate) fn new(code: u16, message: String) -> HttpError {
        HttpError { code, message }
    }

    /// The numeric status code this error was built from.
    #[inline]
    pub fn code(&self) -> u16 {
        self.code
    }

    /// The full message, status string form included.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Returned when [`Status::error`](crate::Status::error) is called on a status
/// that does not represent an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a status code of {code} does not represent an error")]
pub struct NotAnError {
    code: u16,
}

impl NotAnError {
    pub(crate) fn new(code: u16) -> NotAnError {
        NotAnError { code }
    }

    /// The offending status code.
    #[inline]
    pub fn code(&self) -> u16 {
        self.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_its_message() {
        let err = HttpError::new(404, "404 (Not Found) gone missing".to_string());
        assert_eq!(err.to_string(), "404 (Not Found) gone missing");
        assert_eq!(err.message(), err.to_string());
        assert_eq!(err.code(), 404);
    }

    #[test]
    fn http_error_is_a_std_error() {
        let err = HttpError::new(500, "500 (Internal Server Error) boom".to_string());
        let err: &dyn std::error::Error = &err;
        assert!(err.source().is_none());
    }

    #[test]
    fn not_an_error_names_the_code() {
        let refused = NotAnError::new(204);
        assert_eq!(refused.code(), 204);
        assert_eq!(
            refused.to_string(),
            "a status code of 204 does not represent an error"
        );
    }
}
