// SPDX-License-Identifier: FSL-1.1
use crate::{clone::CloneFn, error::StackError, Error, InjectableStack, Stack};

/// Builder type for constructing [`InjectableStack`] instances
pub struct Builder<T> {
    elements: Vec<T>,
    clone_fn: Option<Box<CloneFn<T>>>,
}

impl<T> Builder<T> {
    /// create a new builder
    pub fn new() -> Self {
        Self {
            elements: Vec::default(),
            clone_fn: None,
        }
    }

    /// Initializes the stack with the elements, bottom to top
    pub fn with_elements(mut self, elements: impl IntoIterator<Item = T>) -> Self {
        self.elements = elements.into_iter().collect();
        self
    }

    /// Sets the clone strategy used by `try_clone` and `to_vec`
    pub fn with_clone_fn<F>(mut self, clone_fn: F) -> Self
    where
        F: Fn(&[T]) -> Result<Vec<T>, Error> + 'static,
    {
        self.clone_fn = Some(Box::new(clone_fn));
        self
    }

    /// Tries to build the [`InjectableStack`] from the builder configuration
    pub fn try_build(self) -> Result<InjectableStack<T>, Error> {
        let clone_fn = match self.clone_fn {
            Some(f) => f,
            _ => return Err(StackError::MissingCloneFn.into()),
        };
        Ok(InjectableStack::from_parts(
            Stack::from(self.elements),
            clone_fn,
        ))
    }
}

impl<T> Default for Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}
