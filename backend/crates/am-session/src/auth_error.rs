use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure reported by an [`Authenticator`](crate::Authenticator).
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{operation} rejected: {message} {location}")]
    Rejected {
        operation: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn rejected(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Rejected {
            operation,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
