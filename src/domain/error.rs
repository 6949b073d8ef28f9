//! Domain validation errors.
//!
//! Returned by `try_new` constructors when a request does not satisfy the
//! invariants of the chat domain.
//!
//! # Examples
//!
//! ```
//! use cognita::domain::chat::UserMessage;
//! use cognita::domain::error::DomainError;
//!
//! let result = UserMessage::try_new(Some(""));
//! assert!(matches!(result, Err(DomainError::EmptyMessage)));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The request carried no message, or an empty one.
    #[error("No message provided")]
    EmptyMessage,
}
