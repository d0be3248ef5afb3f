use std::panic::Location;

use am_core::CoreError;
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Article '{id}' already exists {location}")]
    DuplicateId {
        id: String,
        location: ErrorLocation,
    },

    #[error("Invalid article: {source} {location}")]
    Invalid {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl ContentError {
    #[track_caller]
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ContentError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Invalid {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
