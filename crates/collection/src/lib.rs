//! Higher-order operations over slices and hash maps.
//!
//! The crate is a flat set of stateless functions grouped by concern:
//!
//! - **`sequence`**: `map`, `filter`, `flatten`, `reduce`, `for_each` and
//!   their fallible forms `try_map`, `try_reduce`, `try_for_each`.
//! - **`ordering`**: in-place `sort` with an index predicate, plus `max`,
//!   `min`, `max_by_key` and `min_by_key`.
//! - **`selection`**: `distinct`, `distinct_by`, `exists`, `partition`,
//!   `count` and `sum`.
//! - **`mapping`**: `filter_entries`, `clone_map` and `clone_list`.
//!
//! Function composition (`curry`, `compose`, `pipe`, `chain`) lives in
//! `fpkit-core` and is re-exported here.
//!
//! ```
//! use fpkit_collection::prelude::*;
//!
//! let doubled = map(&[1.5, 2.0, 3.5, 4.0], |x| x * 2.0);
//! assert_eq!(sum(&doubled), 22.0);
//! assert_eq!(compose(|x: i32| x * 2, |x: i32| x + 3)(5), 16);
//! ```

pub mod mapping;
pub mod ordering;
pub mod selection;
pub mod sequence;

pub use fpkit_core::functional::{chain, compose, curry, pipe, Compose};
pub use fpkit_core::{Error, Result};
pub use mapping::{clone_list, clone_map, filter_entries};
pub use ordering::{max, max_by_key, min, min_by_key, sort, sort_by};
pub use selection::{count, distinct, distinct_by, exists, partition, sum};
pub use sequence::{
    filter, flatten, for_each, map, reduce, try_for_each, try_map, try_reduce,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::mapping::*;
    pub use crate::ordering::*;
    pub use crate::selection::*;
    pub use crate::sequence::*;
    pub use fpkit_core::functional::prelude::*;
    pub use fpkit_core::{Error, Result};
}
