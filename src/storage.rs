/// Stack construction
pub mod builder;

/// The stack with an injectable clone strategy
pub mod injectable;

/// The stack
pub mod stack;

pub use builder::Builder;
pub use injectable::InjectableStack;
pub use stack::{SearchFn, Stack};
