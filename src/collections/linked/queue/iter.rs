use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::{Queue, QueueContents, QueueNode, QueueState};

impl<T> IntoIterator for Queue<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            queue: self,
        }
    }
}

/// A type for owned iteration over a [`Queue`], yielding elements in the order they would be
/// dequeued.
pub struct IntoIter<T> {
    pub(crate) queue: Queue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.queue.len()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            next: match &self.state {
                QueueState::Empty => None,
                QueueState::Full(QueueContents { head, .. }) => Some(*head),
            },
            remaining: self.len(),
            _phantom: PhantomData,
        }
    }
}

/// A type for borrowed iteration over a [`Queue`], from front to back. See [`Queue::iter`].
pub struct Iter<'a, T> {
    pub(crate) next: Option<NonNull<QueueNode<T>>>,
    pub(crate) remaining: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        // SAFETY: The queue is borrowed for 'a, so none of its nodes can be freed or modified.
        let node = unsafe { &*node.as_ptr() };

        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            next: self.next,
            remaining: self.remaining,
            _phantom: PhantomData,
        }
    }
}
