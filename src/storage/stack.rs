// SPDX-License-Identifier: FSL-1.1
use crate::{clone::deep_simple_clone_all, DeepClone, Error, Truthy};
use rand::Rng;
use std::{iter::Rev, slice};
use tracing::{debug, trace};

/// The shape of a search predicate
pub trait SearchFn<T>: FnMut(&T) -> bool {}

impl<T, F> SearchFn<T> for F where F: FnMut(&T) -> bool {}

/// A last-in, first-out stack backed by a `Vec`. The top of the stack is the
/// end of the vector. Indexes handed to predicates and callbacks count from
/// the top, starting at 0.
///
/// [`Stack::try_clone`] and [`Stack::to_vec`] deep clone the elements with
/// [`deep_simple_clone_all`]; use an
/// [`InjectableStack`](crate::InjectableStack) to supply another strategy.
///
/// ```
/// use lifo::Stack;
///
/// let mut stack = Stack::new();
/// stack.push_all([1, 2, 3, 4, 5]);
/// assert_eq!(Some(5), stack.pop());
/// assert!(!stack.contains(&5));
/// assert_eq!(4, stack.len());
/// assert_eq!(Some(&4), stack.peek());
/// stack.clear();
/// assert!(stack.is_empty());
/// ```
#[derive(Debug, Eq, PartialEq)]
pub struct Stack<T> {
    elements: Vec<T>,
}

impl<T> Stack<T> {
    /// create a new, empty stack
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// return the number of elements on the stack
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// return if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// push an element onto the stack
    pub fn push(&mut self, element: T) {
        self.elements.push(element);
    }

    /// push the elements in order; the last one becomes the top
    pub fn push_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.elements.extend(elements);
    }

    /// remove the top element from the stack
    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    /// remove up to `amount` elements from the top of the stack and return
    /// them bottom to top. An amount of 0 pops a single element.
    pub fn pop_many(&mut self, amount: usize) -> Vec<T> {
        if amount == 0 {
            return self.pop().into_iter().collect();
        }
        let len = self.len();
        if amount > len {
            debug!(amount, len, "pop_many clamped to stack length");
        }
        self.elements.split_off(len - amount.min(len))
    }

    /// get a reference to the top element on the stack
    pub fn peek(&self) -> Option<&T> {
        self.elements.last()
    }

    /// remove all elements
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// return if the element is on the stack, compared with `PartialEq`. For
    /// [`Value`](crate::Value) arrays and records that is structural equality;
    /// use [`Value::identical`](crate::Value::identical) with
    /// [`Stack::find`] to look for the same reference instead.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.elements.contains(element)
    }

    /// iterate over the elements from top to bottom
    pub fn iter(&self) -> Rev<slice::Iter<'_, T>> {
        self.elements.iter().rev()
    }

    /// the first element, scanning from the top, the predicate holds for
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T, usize) -> bool,
    {
        self.iter()
            .enumerate()
            .find(|&(i, e)| predicate(e, i))
            .map(|(_, e)| e)
    }

    /// the last element, scanning from the top, the predicate holds for. The
    /// predicate sees every element.
    pub fn find_last<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T, usize) -> bool,
    {
        self.iter()
            .enumerate()
            .filter(|&(i, e)| predicate(e, i))
            .last()
            .map(|(_, e)| e)
    }

    /// call the callback for every element from top to bottom
    pub fn for_each<F>(&self, mut callback: F)
    where
        F: FnMut(&T, usize),
    {
        for (i, e) in self.iter().enumerate() {
            callback(e, i);
        }
    }

    /// all elements the search function matches, from top to bottom
    pub fn search<P>(&self, mut search_fn: P) -> Vec<&T>
    where
        P: SearchFn<T>,
    {
        self.iter().filter(|&e| search_fn(e)).collect()
    }

    /// move every element one position down; the bottom element becomes the top
    pub fn move_down(&mut self) {
        if !self.is_empty() {
            self.elements.rotate_left(1);
        }
    }

    /// move every element one position up; the top element becomes the bottom
    pub fn move_up(&mut self) {
        if !self.is_empty() {
            self.elements.rotate_right(1);
        }
    }

    /// reverse the order of the stack
    pub fn rotate(&mut self) {
        self.elements.reverse();
    }

    /// swap the two elements on top of the stack
    pub fn swap(&mut self) {
        let len = self.len();
        if len >= 2 {
            self.elements.swap(len - 1, len - 2);
        }
    }

    /// shuffle the stack with the thread-local random number generator
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// shuffle the stack in place with a Fisher-Yates shuffle driven by `rng`
    pub fn shuffle_with<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        trace!(len = self.len(), "shuffling stack");
        for i in (1..self.len()).rev() {
            let j = rng.random_range(0..=i);
            self.elements.swap(i, j);
        }
    }

    /// true if the stack is not empty and every element is truthy
    pub fn all(&self) -> bool
    where
        T: Truthy,
    {
        !self.is_empty() && self.elements.iter().all(Truthy::is_truthy)
    }

    /// true if at least one element is truthy
    pub fn any(&self) -> bool
    where
        T: Truthy,
    {
        self.elements.iter().any(Truthy::is_truthy)
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.elements
    }
}

impl<T: DeepClone> Stack<T> {
    /// create a new stack holding deep clones of the elements, in the same order
    pub fn try_clone(&self) -> Result<Stack<T>, Error> {
        Ok(Stack::from(deep_simple_clone_all(&self.elements)?))
    }

    /// deep clone the elements into a vector, bottom to top
    pub fn to_vec(&self) -> Result<Vec<T>, Error> {
        deep_simple_clone_all(&self.elements)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Rev<slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
