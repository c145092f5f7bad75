//! Double-ended queue with O(1) access at both ends.
//!
//! This module provides [`Deque`], a doubly-linked queue whose nodes live in an
//! index-linked arena:
//!
//! - O(1) `peek_left` / `peek_right`
//! - O(1) `push_left` / `push_right` (amortized over arena growth)
//! - O(1) `pop_left` / `pop_right`
//! - O(n) shallow or deep `copy`
//! - O(n) in-place `reverse` that swaps payloads instead of relinking nodes
//!
//! The deque knows nothing about what it stores. Elements are usually
//! [`ReferenceCounter`](crate::ReferenceCounter) handles, so a shallow copy
//! shares the pointees between two independently owned deques.
//!
//! # Absent deques
//!
//! The free functions in this module accept an optional deque and treat `None`
//! as an ordinary input: counting it yields `0`, peeking or popping yields
//! `None`, pushing or reversing does nothing, and copying yields a new empty
//! deque.
//!
//! ```rust
//! use tagdeque::deque::{self, Deque};
//!
//! let mut present: Deque<i32> = (1..=3).collect();
//! let absent: Option<&mut Deque<i32>> = None;
//!
//! assert_eq!(deque::pop_left(Some(&mut present)), Some(1));
//! assert_eq!(deque::pop_left(absent), None);
//! assert_eq!(deque::count::<i32>(None), 0);
//! assert!(deque::copy::<i32>(None).is_empty());
//! ```

mod arena;
mod linked;

pub use linked::Deque;
pub use linked::DequeIntoIterator;
pub use linked::DequeIterator;

/// Returns the number of elements in `deque`, or `0` when it is absent.
#[must_use]
pub fn count<T>(deque: Option<&Deque<T>>) -> usize {
    deque.map_or(0, Deque::len)
}

/// Returns the leftmost element of `deque`, if it is present and non-empty.
#[must_use]
pub fn peek_left<T>(deque: Option<&Deque<T>>) -> Option<&T> {
    deque.and_then(Deque::peek_left)
}

/// Returns the rightmost element of `deque`, if it is present and non-empty.
#[must_use]
pub fn peek_right<T>(deque: Option<&Deque<T>>) -> Option<&T> {
    deque.and_then(Deque::peek_right)
}

/// Pushes `element` at the left end of `deque` and hands the deque back.
pub fn push_left<T>(
    deque: Option<&mut Deque<T>>,
    element: impl Into<Option<T>>,
) -> Option<&mut Deque<T>> {
    deque.map(|deque| deque.push_left(element))
}

/// Pushes `element` at the right end of `deque` and hands the deque back.
pub fn push_right<T>(
    deque: Option<&mut Deque<T>>,
    element: impl Into<Option<T>>,
) -> Option<&mut Deque<T>> {
    deque.map(|deque| deque.push_right(element))
}

/// Removes and returns the leftmost element of `deque`.
pub fn pop_left<T>(deque: Option<&mut Deque<T>>) -> Option<T> {
    deque.and_then(Deque::pop_left)
}

/// Removes and returns the rightmost element of `deque`.
pub fn pop_right<T>(deque: Option<&mut Deque<T>>) -> Option<T> {
    deque.and_then(Deque::pop_right)
}

/// Shallow-copies `deque`; an absent deque copies to a new empty one.
#[must_use]
pub fn copy<T: Clone>(deque: Option<&Deque<T>>) -> Deque<T> {
    deque.map_or_else(Deque::new, Deque::copy)
}

/// Copies `deque` through `copy_element`; an absent deque copies to a new
/// empty one without calling `copy_element`.
#[must_use]
pub fn copy_with<T, F>(deque: Option<&Deque<T>>, copy_element: F) -> Deque<T>
where
    F: FnMut(&T) -> T,
{
    deque.map_or_else(Deque::new, |deque| deque.copy_with(copy_element))
}

/// Reverses `deque` in place and hands it back.
pub fn reverse<T>(deque: Option<&mut Deque<T>>) -> Option<&mut Deque<T>> {
    deque.map(Deque::reverse)
}
