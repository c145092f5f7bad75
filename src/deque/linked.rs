use std::fmt;
use std::hash::{Hash, Hasher};

use super::arena::{Arena, Node};

/// A mutable double-ended queue built from doubly-linked nodes.
///
/// Every node is allocated on push and released on pop; the element it carried
/// is moved out to the caller. Neighbour links are slot indices into an arena
/// owned by the deque, so there is exactly one owner for every node. Once pops
/// leave at least half of the arena vacant the live nodes are packed together
/// and the rest of the storage is dropped.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `new`        | O(1) |
/// | `len`        | O(1) |
/// | `peek_left`  | O(1) |
/// | `peek_right` | O(1) |
/// | `push_left`  | O(1) amortized |
/// | `push_right` | O(1) amortized |
/// | `pop_left`   | O(1) amortized |
/// | `pop_right`  | O(1) amortized |
/// | `copy`       | O(n) |
/// | `reverse`    | O(n) |
///
/// # Examples
///
/// ```rust
/// use tagdeque::deque::Deque;
///
/// let mut deque: Deque<i32> = Deque::new();
/// deque.push_right(1).push_right(2).push_left(0);
///
/// assert_eq!(deque.peek_left(), Some(&0));
/// assert_eq!(deque.peek_right(), Some(&2));
/// assert_eq!(deque.len(), 3);
/// ```
pub struct Deque<T> {
    nodes: Arena<T>,
    leftmost: Option<usize>,
    rightmost: Option<usize>,
    count: usize,
}

impl<T> Deque<T> {
    /// Creates a new empty deque.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            leftmost: None,
            rightmost: None,
            count: 0,
        }
    }

    /// Creates an empty deque with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            leftmost: None,
            rightmost: None,
            count: 0,
        }
    }

    /// Returns the number of elements in the deque.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the deque contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns a reference to the leftmost element, if any.
    #[inline]
    #[must_use]
    pub fn peek_left(&self) -> Option<&T> {
        self.leftmost.map(|index| &self.nodes.get(index).element)
    }

    /// Returns a reference to the rightmost element, if any.
    #[inline]
    #[must_use]
    pub fn peek_right(&self) -> Option<&T> {
        self.rightmost.map(|index| &self.nodes.get(index).element)
    }

    /// Links a new node carrying `element` at the left end.
    ///
    /// Passing `None` pushes nothing: the count and both ends stay as they
    /// were. Returns the deque so calls can be chained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagdeque::deque::Deque;
    ///
    /// let mut deque: Deque<i32> = Deque::new();
    /// deque.push_left(2).push_left(None).push_left(1);
    /// assert_eq!(deque.len(), 2);
    /// assert_eq!(deque.peek_left(), Some(&1));
    /// ```
    pub fn push_left(&mut self, element: impl Into<Option<T>>) -> &mut Self {
        let Some(element) = element.into() else {
            return self;
        };

        let index = self.nodes.allocate(Node {
            left: None,
            right: self.leftmost,
            element,
        });
        match self.leftmost {
            Some(previous) => self.nodes.get_mut(previous).left = Some(index),
            None => self.rightmost = Some(index),
        }
        self.leftmost = Some(index);
        self.count += 1;
        self
    }

    /// Links a new node carrying `element` at the right end.
    ///
    /// Passing `None` pushes nothing. Returns the deque so calls can be chained.
    pub fn push_right(&mut self, element: impl Into<Option<T>>) -> &mut Self {
        let Some(element) = element.into() else {
            return self;
        };

        let index = self.nodes.allocate(Node {
            left: self.rightmost,
            right: None,
            element,
        });
        match self.rightmost {
            Some(previous) => self.nodes.get_mut(previous).right = Some(index),
            None => self.leftmost = Some(index),
        }
        self.rightmost = Some(index);
        self.count += 1;
        self
    }

    /// Unlinks the leftmost node and returns its element.
    ///
    /// Returns `None` if the deque is empty. Removing the last element clears
    /// both ends together.
    pub fn pop_left(&mut self) -> Option<T> {
        let index = self.leftmost?;
        let node = self.nodes.release(index);
        match node.right {
            Some(next) => {
                self.nodes.get_mut(next).left = None;
                self.leftmost = Some(next);
                self.reclaim();
            }
            None => self.unlink_all(),
        }
        self.count -= 1;
        Some(node.element)
    }

    /// Unlinks the rightmost node and returns its element.
    ///
    /// Returns `None` if the deque is empty.
    pub fn pop_right(&mut self) -> Option<T> {
        let index = self.rightmost?;
        let node = self.nodes.release(index);
        match node.left {
            Some(next) => {
                self.nodes.get_mut(next).right = None;
                self.rightmost = Some(next);
                self.reclaim();
            }
            None => self.unlink_all(),
        }
        self.count -= 1;
        Some(node.element)
    }

    /// Same as [`peek_left`](Self::peek_left); the left end is the stack top.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.peek_left()
    }

    /// Same as [`push_left`](Self::push_left).
    #[inline]
    pub fn push(&mut self, element: impl Into<Option<T>>) -> &mut Self {
        self.push_left(element)
    }

    /// Same as [`pop_left`](Self::pop_left).
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.pop_left()
    }

    /// Returns a new deque holding the same elements in the same order.
    ///
    /// This is a shallow copy: each element is cloned, which for a
    /// [`ReferenceCounter`](crate::ReferenceCounter) shares the pointee with
    /// the original deque rather than duplicating it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagdeque::ReferenceCounter;
    /// use tagdeque::deque::Deque;
    ///
    /// let shared = ReferenceCounter::new(String::from("shared"));
    /// let mut original: Deque<ReferenceCounter<String>> = Deque::new();
    /// original.push_right(ReferenceCounter::clone(&shared));
    ///
    /// let copy = original.copy();
    /// original.pop_left();
    ///
    /// assert_eq!(copy.len(), 1);
    /// assert!(ReferenceCounter::ptr_eq(copy.peek_left().unwrap(), &shared));
    /// ```
    #[must_use]
    pub fn copy(&self) -> Self
    where
        T: Clone,
    {
        self.copy_with(T::clone)
    }

    /// Returns a new deque whose elements are `copy_element` applied to each
    /// element of this one, left to right.
    ///
    /// Use this for deep copies, where `copy_element` duplicates whatever the
    /// element refers to.
    #[must_use]
    pub fn copy_with<F>(&self, mut copy_element: F) -> Self
    where
        F: FnMut(&T) -> T,
    {
        let mut copy = Self::with_capacity(self.count);
        for element in self {
            copy.push_right(copy_element(element));
        }
        copy
    }

    /// Reverses the order of the elements in place.
    ///
    /// Two cursors start at the ends and walk inwards, swapping the elements
    /// carried by each mirrored pair of nodes until they meet (odd count) or
    /// pass each other (even count). Links are never rewritten and no node is
    /// allocated or released. Relinking every node would be equally O(n) but
    /// touches four indices per node instead of one payload pair per two
    /// nodes; either yields the same observable order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagdeque::deque::Deque;
    ///
    /// let mut deque: Deque<i32> = (1..=3).collect();
    /// deque.reverse();
    /// assert_eq!(deque.pop_left(), Some(3));
    /// assert_eq!(deque.iter().collect::<Vec<_>>(), vec![&2, &1]);
    /// ```
    pub fn reverse(&mut self) -> &mut Self {
        let (Some(mut left), Some(mut right)) = (self.leftmost, self.rightmost) else {
            return self;
        };

        while left != right {
            self.nodes.swap_elements(left, right);

            let next_left = self.nodes.get(left).right;
            if next_left == Some(right) {
                break;
            }
            match (next_left, self.nodes.get(right).left) {
                (Some(next_left), Some(next_right)) => {
                    left = next_left;
                    right = next_right;
                }
                _ => break,
            }
        }
        self
    }

    /// Removes and drops every element.
    pub fn clear(&mut self) {
        self.unlink_all();
        self.count = 0;
    }

    /// Creates an iterator over references to the elements, left to right.
    #[must_use]
    pub fn iter(&self) -> DequeIterator<'_, T> {
        DequeIterator {
            deque: self,
            front: self.leftmost,
            back: self.rightmost,
            remaining: self.count,
        }
    }

    /// Checks the structural invariants of the deque.
    ///
    /// Returns `true` when all of the following hold:
    ///
    /// - the deque is empty exactly when both ends are absent;
    /// - the leftmost node has no left neighbour and the rightmost node has no
    ///   right neighbour;
    /// - every right link is mirrored by a left link and vice versa;
    /// - walking right from the leftmost node visits `len()` nodes and stops at
    ///   the rightmost node;
    /// - no node is stored that is not reachable from the ends.
    #[must_use]
    pub fn is_well_linked(&self) -> bool {
        let (leftmost, rightmost) = match (self.leftmost, self.rightmost) {
            (None, None) => return self.count == 0 && self.nodes.occupied() == 0,
            (Some(leftmost), Some(rightmost)) => (leftmost, rightmost),
            _ => return false,
        };
        if self.count == 0 || self.nodes.get(leftmost).left.is_some() {
            return false;
        }

        let mut visited = 1;
        let mut current = leftmost;
        while let Some(next) = self.nodes.get(current).right {
            if self.nodes.get(next).left != Some(current) || visited >= self.count {
                return false;
            }
            visited += 1;
            current = next;
        }

        current == rightmost && visited == self.count && self.nodes.occupied() == self.count
    }

    /// Compacts the arena once at most half of its slots hold nodes.
    fn reclaim(&mut self) {
        if !self.nodes.is_sparse() {
            return;
        }
        if let Some(leftmost) = self.leftmost {
            let (leftmost, rightmost) = self.nodes.compact(leftmost);
            self.leftmost = Some(leftmost);
            self.rightmost = Some(rightmost);
        }
    }

    fn unlink_all(&mut self) {
        self.nodes.clear();
        self.leftmost = None;
        self.rightmost = None;
    }
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Deque<crate::ReferenceCounter<i32>>: Send, Sync);

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: Hash> Hash for Deque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Deque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_right(element);
        }
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = DequeIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        DequeIntoIterator { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = DequeIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`Deque`], following the node links.
pub struct DequeIterator<'a, T> {
    deque: &'a Deque<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for DequeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.deque.nodes.get(self.front?);
        self.front = node.right;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for DequeIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.deque.nodes.get(self.back?);
        self.back = node.left;
        self.remaining -= 1;
        Some(&node.element)
    }
}

impl<T> ExactSizeIterator for DequeIterator<'_, T> {}

/// Owning iterator over a [`Deque`]; pops from the left.
pub struct DequeIntoIterator<T> {
    deque: Deque<T>,
}

impl<T> Iterator for DequeIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.pop_left()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> DoubleEndedIterator for DequeIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.pop_right()
    }
}

impl<T> ExactSizeIterator for DequeIntoIterator<T> {}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Deque<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct DequeVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> DequeVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for DequeVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Deque<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut deque = Deque::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            deque.push_right(Some(element));
        }
        Ok(deque)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Deque<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(DequeVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
