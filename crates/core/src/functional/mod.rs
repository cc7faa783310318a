//! Function composition for fpkit
//!
//! Curry, compose, pipe and chain over plain closures.

pub mod composition;

pub use composition::operators::{chain, compose, curry, pipe};
pub use composition::Compose;

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::composition::operators::*;
    pub use super::composition::Compose;
    pub use crate::chain;
}
