//! Core error type definitions

/// Boxed cause carried by errors raised from caller-supplied closures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for fpkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fpkit operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A mapping closure failed on the element at `index`
    #[error("error mapping at index:'{index}', error: {source}")]
    Mapping {
        index: usize,
        #[source]
        source: BoxError,
    },

    /// A fold closure failed on the element at `index`
    #[error("error reducing at index:'{index}', error: {source}")]
    Reduce {
        index: usize,
        #[source]
        source: BoxError,
    },
}

impl Error {
    /// Zero-based position of the element that failed
    pub fn index(&self) -> usize {
        match self {
            Error::Mapping { index, .. } | Error::Reduce { index, .. } => *index,
        }
    }
}
