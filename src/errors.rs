use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A synthesized failure outcome.
///
/// These are terminal results of an operation, delivered through the
/// `Err` arm of [`Outcome`](crate::Outcome); the dispatcher itself
/// never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ServiceError {
    /// Carries a human-readable message.
    #[error("{0}")]
    ErrorWithMessage(String),

    /// Carries nothing.
    #[error("the service failed without further detail")]
    GenericError,
}
