//! Builder methods for creating errors with context

use super::types::{BoxError, Error};

impl Error {
    /// Create a mapping error tagged with the failing element's index
    #[must_use]
    pub fn mapping(index: usize, source: impl Into<BoxError>) -> Self {
        Error::Mapping {
            index,
            source: source.into(),
        }
    }

    /// Create a fold error tagged with the failing element's index
    #[must_use]
    pub fn reduce(index: usize, source: impl Into<BoxError>) -> Self {
        Error::Reduce {
            index,
            source: source.into(),
        }
    }
}
