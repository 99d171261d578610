// SPDX-License-Identifier: FSL-1.1
#![warn(missing_docs)]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

//! LIFO stacks with structural deep cloning

/// Deep clone and clone strategies
pub mod clone;
pub use clone::{
    deep_simple_clone, deep_simple_clone_all, shallow_clone_all, CloneFn, DeepClone, Kind,
};

/// Errors produced by this library
pub mod error;
pub use error::Error;

/// Stack types
pub mod storage;
pub use storage::{Builder, InjectableStack, SearchFn, Stack};

/// Truthiness of stack elements
pub mod truthy;
pub use truthy::Truthy;

/// Dynamically typed values
pub mod value;
pub use value::Value;

/// ...and in the darkness bind them
pub mod prelude {
    pub use super::*;
}
