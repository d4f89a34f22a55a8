use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{Chain, LinkedList, NodePtr};

impl<T> Chain<T> {
    /// Shrinks a borrowed window over the nodes by one node at the front, returning that node.
    /// The nodes themselves are never touched.
    pub(crate) fn take_front(&mut self) -> Option<NodePtr<T>> {
        let mut ends = self.ends()?;
        let node = ends.head;

        *self = match ends.len.decrement() {
            Some(len) => {
                // SAFETY: The window held more than one node, so the head has a successor.
                ends.head = unsafe { node.next().unwrap_unchecked() };
                ends.len = len;
                Chain::Linked(ends)
            },
            None => Chain::Empty,
        };
        Some(node)
    }

    /// As with [`take_front`](Chain::take_front), from the back of the window.
    pub(crate) fn take_back(&mut self) -> Option<NodePtr<T>> {
        let mut ends = self.ends()?;
        let node = ends.tail;

        *self = match ends.len.decrement() {
            Some(len) => {
                // SAFETY: The window held more than one node, so the tail has a predecessor.
                ends.tail = unsafe { node.prev().unwrap_unchecked() };
                ends.len = len;
                Chain::Linked(ends)
            },
            None => Chain::Empty,
        };
        Some(node)
    }
}

/// Borrowed iteration over a [`LinkedList`], front to back or in reverse.
pub struct Iter<'a, T> {
    pub(crate) window: Chain<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

/// Mutable iteration over a [`LinkedList`]. Every node is yielded at most once, so the
/// references handed out never alias.
pub struct IterMut<'a, T> {
    pub(crate) window: Chain<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

/// Owned iteration over a [`LinkedList`], unlinking each element as it is yielded. Anything left
/// over is dropped with the iterator.
pub struct IntoIter<T> {
    pub(crate) list: LinkedList<T>,
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            window: self.chain,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            window: self.chain,
            _phantom: PhantomData,
        }
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.window.take_front().map(|node| node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.window.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.window.take_back().map(|node| node.value())
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.window.take_front().map(|mut node| node.value_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.window.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.window.take_back().map(|mut node| node.value_mut())
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for Iter<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            window: self.window,
            _phantom: PhantomData,
        }
    }
}
