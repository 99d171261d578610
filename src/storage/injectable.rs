// SPDX-License-Identifier: FSL-1.1
use crate::{
    clone::{deep_simple_clone_all, CloneFn},
    DeepClone, Error, Stack,
};
use std::{
    fmt,
    ops::{Deref, DerefMut},
};

/// A [`Stack`] that clones its elements with an injected clone strategy
/// instead of the default deep clone. Every other operation is the plain
/// stack's, reached through `Deref`.
///
/// ```
/// use lifo::{shallow_clone_all, InjectableStack};
/// use std::collections::HashMap;
///
/// let mut stack = InjectableStack::with_clone_fn(Vec::new(), shallow_clone_all);
/// stack.push(HashMap::from([("a", 1)]));
/// let copy = stack.to_vec().unwrap();
/// assert_eq!(Some(&1), copy[0].get("a"));
/// ```
pub struct InjectableStack<T> {
    stack: Stack<T>,
    clone_fn: Box<CloneFn<T>>,
}

impl<T> InjectableStack<T> {
    /// create a stack from the elements, bottom to top, that clones with
    /// `clone_fn`
    pub fn with_clone_fn<I, F>(elements: I, clone_fn: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&[T]) -> Result<Vec<T>, Error> + 'static,
    {
        Self::from_parts(elements.into_iter().collect(), Box::new(clone_fn))
    }

    pub(crate) fn from_parts(stack: Stack<T>, clone_fn: Box<CloneFn<T>>) -> Self {
        Self { stack, clone_fn }
    }

    /// create a new plain stack from the output of the clone strategy
    pub fn try_clone(&self) -> Result<Stack<T>, Error> {
        Ok(Stack::from(self.to_vec()?))
    }

    /// run the clone strategy over the elements, bottom to top
    pub fn to_vec(&self) -> Result<Vec<T>, Error> {
        (self.clone_fn)(self.stack.as_slice())
    }

    /// consume this stack, returning the inner plain stack
    pub fn into_inner(self) -> Stack<T> {
        self.stack
    }
}

impl<T: DeepClone + 'static> InjectableStack<T> {
    /// create a new, empty stack using the default deep clone
    pub fn new() -> Self {
        Self::with_clone_fn(Vec::new(), deep_simple_clone_all::<T>)
    }
}

impl<T: DeepClone + 'static> Default for InjectableStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeepClone + 'static> From<Vec<T>> for InjectableStack<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::with_clone_fn(elements, deep_simple_clone_all::<T>)
    }
}

impl<T> Deref for InjectableStack<T> {
    type Target = Stack<T>;

    fn deref(&self) -> &Self::Target {
        &self.stack
    }
}

impl<T> DerefMut for InjectableStack<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.stack
    }
}

impl<T: fmt::Debug> fmt::Debug for InjectableStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InjectableStack {{ stack: {:?} }}", self.stack)
    }
}
