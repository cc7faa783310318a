//! Core building blocks shared by the `fpkit` crates.
//!
//! ## Key Components
//!
//! - **`errors`**: the `Error` enum and `Result` alias. Failures raised by
//!   caller closures are boxed and tagged with the index of the element
//!   that produced them.
//! - **`functional`**: curry, compose, pipe and chain, plus the `chain!` macro.
//! - **`tracing`** (feature `subscriber`): subscriber setup driven by `RUST_LOG`.

pub mod errors;
pub mod functional;
#[cfg(feature = "subscriber")]
pub mod tracing;

pub use self::errors::{BoxError, Error, Result};
