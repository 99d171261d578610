// SPDX-License-Identifier: FSL-1.1
use crate::{clone::deep::clone_array, DeepClone, Error};
use tracing::trace;

/// The shape of a clone strategy. It receives the whole backing sequence of a
/// stack, bottom to top, and must return a sequence of equal length holding
/// equivalent values. Stacks do not check either property.
pub type CloneFn<T> = dyn Fn(&[T]) -> Result<Vec<T>, Error>;

/// The default clone strategy: deep clones every element
pub fn deep_simple_clone_all<T: DeepClone>(elements: &[T]) -> Result<Vec<T>, Error> {
    trace!(len = elements.len(), "deep cloning elements");
    clone_array(elements)
}

/// A clone strategy for element types the deep clone rejects; it relies on
/// the element's own `Clone` and so shares whatever that shares
pub fn shallow_clone_all<T: Clone>(elements: &[T]) -> Result<Vec<T>, Error> {
    trace!(len = elements.len(), "shallow cloning elements");
    Ok(elements.to_vec())
}
