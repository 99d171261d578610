// SPDX-License-Identifier: FSL-1.1

/// Errors created by this library
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Clone error
    #[error(transparent)]
    Clone(#[from] CloneError),
    /// Stack error
    #[error(transparent)]
    Stack(#[from] StackError),

    /// Custom error message
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// creates a custom error from a string
    pub fn custom(s: &impl ToString) -> Error {
        Error::Custom(s.to_string())
    }
}

/// Deep clone errors created by this library
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CloneError {
    /// The value is not an array, a plain record or a primitive
    #[error("unsupported type encountered: {0}")]
    UnsupportedType(&'static str),
}

/// Stack construction errors created by this library
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum StackError {
    /// The builder was not given a clone function
    #[error("missing clone function")]
    MissingCloneFn,
}
