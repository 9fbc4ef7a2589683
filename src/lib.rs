//! HTTP status codes, reason phrases, and response classes.
//!
//! This is a pure lookup library: a compiled‐in registry of status codes with
//! their standardised reason phrases, a range classifier, and a small [`Status`]
//! value object that can render itself and, for error‐classified codes, build an
//! [`HttpError`] to propagate.
//!
//! ```rust
//! use httpstatus::{Status, ResponseClass};
//!
//! let status = Status::new(404);
//! assert_eq!(status.text(), "Not Found");
//! assert_eq!(status.class(), ResponseClass::ClientError);
//! assert_eq!(status.to_string(), "404 (Not Found)");
//!
//! let err = status.error().unwrap();
//! assert_eq!(err.code(), 404);
//! assert_eq!(err.to_string(), "404 (Not Found) Client Error");
//! ```
//!
//! Everything here is synchronous and immutable; the registry is safe for
//! unsynchronised concurrent reads from any number of threads.

#![warn(missing_docs)]

pub mod error;
pub mod status;

pub use error::{HttpError, NotAnError};
pub use status::{reason_phrase, registered, response_class, ResponseClass, Status, StatusEntry};
