//! Error types for fpkit operations

mod builders;
mod types;

pub use types::{BoxError, Error, Result};
