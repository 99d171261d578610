/// The recursive deep clone
pub mod deep;

/// Value shape classification
pub mod kind;

/// Clone strategies for stacks
pub mod strategy;

pub use deep::{clone_array, clone_object, deep_simple_clone, DeepClone};
pub use kind::Kind;
pub use strategy::{deep_simple_clone_all, shallow_clone_all, CloneFn};
