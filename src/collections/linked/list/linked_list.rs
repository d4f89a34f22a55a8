use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{Iter, IterMut, Length, Link, Node, NodePtr, ONE};
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::error::CapacityOverflow;
use crate::util::fmt::DebugEntries;
use crate::util::result::ResultExtension;

/// A sequence with links in both directions, where every element lives in its own heap
/// allocation. Elements never move once inserted, so growing the list is always `O(1)`.
///
/// Lookups by index walk from whichever end of the list is nearer.
///
/// | Method | Complexity |
/// |-|-|
/// | `front`, `back`, `push_*`, `pop_*`, `append` | `O(1)` |
/// | `get`, `insert`, `remove` at index `i` | `O(min(i, len - i))` |
/// | `resize`, `contains`, `clear`, `Clone` | `O(len)` |
///
/// Each step of a walk is likely to be a cache miss, so
/// [`DynamicArray`](crate::collections::contiguous::DynamicArray) is usually the better choice
/// unless elements are mostly added and removed at the ends.
pub struct LinkedList<T> {
    pub(crate) chain: Chain<T>,
    pub(crate) _phantom: PhantomData<T>,
}

/// The nodes of a list. Also used by the borrowed iterators as a shrinking window over the
/// nodes that haven't been yielded yet, which is why it is `Copy`.
#[derive(IsVariant)]
pub(crate) enum Chain<T> {
    Empty,
    Linked(Ends<T>),
}

use Chain::*;

pub(crate) struct Ends<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            chain: Empty,
            _phantom: PhantomData,
        }
    }

    /// Creates a new LinkedList holding `len` elements, each constructed by calling `f`, front to
    /// back.
    pub fn from_fn<F: FnMut() -> T>(len: usize, f: F) -> LinkedList<T> {
        let mut list = LinkedList::new();
        list.resize_with(len, f);
        list
    }

    pub const fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn front(&self) -> Option<&T> {
        self.chain.ends().map(|ends| ends.head.value())
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.chain.ends().map(|mut ends| ends.head.value_mut())
    }

    pub fn back(&self) -> Option<&T> {
        self.chain.ends().map(|ends| ends.tail.value())
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.chain.ends().map(|mut ends| ends.tail.value_mut())
    }

    /// Links `value` in as the new first element.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a [`usize`].
    pub fn push_front(&mut self, value: T) {
        self.chain.link_after(None, value);
    }

    /// Links `value` in as the new last element.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a [`usize`].
    pub fn push_back(&mut self, value: T) {
        let tail = self.chain.ends().map(|ends| ends.tail);
        self.chain.link_after(tail, value);
    }

    /// Unlinks and returns the first element, or [`None`] for an empty list.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.chain.ends()?.head;
        // SAFETY: The head belongs to this chain.
        Some(unsafe { self.chain.unlink(head) })
    }

    /// Unlinks and returns the last element, or [`None`] for an empty list.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.chain.ends()?.tail;
        // SAFETY: The tail belongs to this chain.
        Some(unsafe { self.chain.unlink(tail) })
    }

    /// Truncates or extends the list at the back so that it holds exactly `new_len` elements,
    /// constructing new elements by calling `f`.
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) {
        while self.len() > new_len {
            self.pop_back();
        }
        while self.len() < new_len {
            self.push_back(f());
        }
    }

    /// Returns a reference to the element at `index`. Also available through [`Index`].
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.chain.node_at(index)?.value())
    }

    /// Returns a mutable reference to the element at `index`. Also available through
    /// [`IndexMut`].
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.chain.node_at(index)?.value_mut())
    }

    /// Links `value` in so that it ends up at `index`. Any index up to and including the length
    /// is valid, with the length itself meaning the back of the list.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the list.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// As with [`insert`](LinkedList::insert), returning an [`Err`] instead of panicking. The list
    /// is left unchanged on failure.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len();
        if index > len {
            return Err(IndexOutOfBounds { index, len });
        }

        let after = match index.checked_sub(1) {
            Some(before) => Some(self.chain.node_at(before)?),
            None => None,
        };
        self.chain.link_after(after, value);
        Ok(())
    }

    /// Unlinks and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let node = self.chain.node_at(index)?;
        // SAFETY: node_at only returns nodes from this chain.
        Ok(unsafe { self.chain.unlink(node) })
    }

    /// Drops every element, leaving the list empty.
    pub fn clear(&mut self) {
        drop(mem::take(self));
    }

    /// Moves every element of `other` onto the back of this list, without reallocating any of
    /// them.
    ///
    /// # Panics
    /// Panics if the combined length would overflow a [`usize`].
    pub fn append(&mut self, mut other: LinkedList<T>) {
        let Linked(back) = mem::replace(&mut other.chain, Empty) else {
            return;
        };

        match &mut self.chain {
            Empty => self.chain = Linked(back),
            Linked(front) => {
                front.len = front.len
                    .checked_add(back.len.get())
                    .ok_or(CapacityOverflow)
                    .throw();

                *front.tail.next_mut() = Some(back.head);
                *back.head.prev_mut() = Some(front.tail);
                front.tail = back.tail;
            },
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    #[cfg(test)]
    pub(crate) fn assert_links_consistent(&self) {
        let Some(ends) = self.chain.ends() else {
            return;
        };

        assert!(ends.head.prev().is_none(), "The head shouldn't have a previous node.");
        let mut count = 1;
        let mut node = ends.head;
        while let Some(next) = *node.next() {
            assert!(*next.prev() == Some(node), "Each next node should link back.");
            node = next;
            count += 1;
        }
        assert!(node == ends.tail, "Walking forwards should end at the tail.");
        assert_eq!(count, ends.len.get());
    }
}

impl<T: Clone> LinkedList<T> {
    /// Creates a new LinkedList holding `len` clones of `value`.
    pub fn filled(len: usize, value: T) -> LinkedList<T> {
        LinkedList::from_fn(len, || value.clone())
    }

    /// Truncates or extends the list at the back so that it holds exactly `new_len` elements,
    /// filling with clones of `value`.
    pub fn resize(&mut self, new_len: usize, value: T) {
        self.resize_with(new_len, || value.clone());
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns true if any element of the list is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> Chain<T> {
    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Linked(ends) => ends.len.get(),
        }
    }

    pub const fn ends(&self) -> Option<Ends<T>> {
        match self {
            Empty => None,
            Linked(ends) => Some(*ends),
        }
    }

    /// Returns the node at `index`, walking from the nearer end.
    pub fn node_at(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        match self {
            Linked(ends) if index < ends.len.get() => {
                let from_back = ends.len.get() - 1 - index;
                Ok(if index <= from_back {
                    walk(ends.head, index, |node| *node.next())
                } else {
                    walk(ends.tail, from_back, |node| *node.prev())
                })
            },
            _ => Err(IndexOutOfBounds { index, len: self.len() }),
        }
    }

    /// Allocates a node for `value` and links it in directly after `after`, or at the front when
    /// `after` is [`None`].
    pub fn link_after(&mut self, after: Link<T>, value: T) {
        match self {
            Empty => {
                let node = NodePtr::from_node(Node { value, prev: None, next: None });
                *self = Linked(Ends { len: ONE, head: node, tail: node });
            },
            Linked(ends) => {
                ends.len = ends.len.increment();

                let next = match after {
                    Some(prev) => *prev.next(),
                    None => Some(ends.head),
                };
                let node = NodePtr::from_node(Node { value, prev: after, next });

                match after {
                    Some(prev) => *prev.next_mut() = Some(node),
                    None => ends.head = node,
                }
                match next {
                    Some(next) => *next.prev_mut() = Some(node),
                    None => ends.tail = node,
                }
            },
        }
    }

    /// Unlinks `node`, frees it and returns its value, joining its neighbours together.
    ///
    /// # Safety
    /// `node` must belong to this chain.
    pub unsafe fn unlink(&mut self, node: NodePtr<T>) -> T {
        // SAFETY: The node belongs to this chain and every link to it is replaced below.
        let Node { value, prev, next } = unsafe { node.take_node() };

        if let Linked(ends) = self {
            match ends.len.decrement() {
                None => *self = Empty,
                Some(len) => {
                    ends.len = len;
                    match (prev, next) {
                        (Some(prev), Some(next)) => {
                            *prev.next_mut() = Some(next);
                            *next.prev_mut() = Some(prev);
                        },
                        (None, Some(next)) => {
                            *next.prev_mut() = None;
                            ends.head = next;
                        },
                        (Some(prev), None) => {
                            *prev.next_mut() = None;
                            ends.tail = prev;
                        },
                        // A lone node always takes the len == 1 branch.
                        (None, None) => {},
                    }
                },
            }
        }

        value
    }
}

fn walk<T>(mut node: NodePtr<T>, steps: usize, step: impl Fn(NodePtr<T>) -> Link<T>) -> NodePtr<T> {
    for _ in 0..steps {
        // SAFETY: Callers only walk as far as the opposite end of the chain.
        node = unsafe { step(node).unwrap_unchecked() };
    }
    node
}

impl<T> Clone for Ends<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Ends<T> {}

impl<T> Clone for Chain<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Chain<T> {}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push_back(value));
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // One node at a time, so that long lists can't overflow the stack.
        while self.pop_front().is_some() {}
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|value| value.hash(state));
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut values = self.iter();
        if let Some(first) = values.next() {
            write!(f, "({first:?})")?;
        }
        values.try_for_each(|value| write!(f, " -> ({value:?})"))
    }
}

// SAFETY: LinkedLists exclusively own their nodes, so they are Send when T is.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: The safe API only hands out shared references through &self.
unsafe impl<T: Sync> Sync for LinkedList<T> {}
