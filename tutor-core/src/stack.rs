use core::{iter, slice};

use thiserror::Error;

/// A vec-backed LIFO container.
///
/// Insertion and removal happen only at the top, so insertion order is
/// preserved and the most recently pushed element is the only one directly
/// observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
  items: Vec<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
  #[error("stack underflow")]
  Underflow,
}

impl<T> Stack<T> {
  #[inline]
  pub fn new() -> Self {
    Self { items: Vec::new() }
  }

  #[inline]
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      items: Vec::with_capacity(capacity),
    }
  }

  #[inline]
  pub fn push(&mut self, value: T) {
    self.items.push(value);
  }

  /// Removes and returns the top element. Popping an empty stack is the one
  /// error this container knows; it leaves the stack untouched.
  #[inline]
  pub fn pop(&mut self) -> Result<T, StackError> {
    self.items.pop().ok_or(StackError::Underflow)
  }

  #[inline]
  pub fn top(&self) -> Option<&T> {
    self.items.last()
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.items.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Iterates from the top of the stack down to the bottom.
  #[inline]
  pub fn iter_top_down(&self) -> iter::Rev<slice::Iter<'_, T>> {
    self.items.iter().rev()
  }
}

impl<T: Clone> Stack<T> {
  /// Value copy for destructive traversal; the original stays intact.
  #[inline]
  pub fn snapshot(&self) -> Self {
    self.clone()
  }
}

impl<T> Default for Stack<T> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<T> FromIterator<T> for Stack<T> {
  /// Builds a stack as if each element had been pushed in iteration order,
  /// so the last element yielded ends up on top.
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self {
      items: iter.into_iter().collect(),
    }
  }
}
