use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::collections::linked::list::{Length, ONE};
#[doc(inline)]
pub use crate::util::error::EmptyCollection;
use crate::util::fmt::DebugEntries;
use crate::util::result::ResultExtension;

use super::Iter;

/// A first-in first-out collection, with links in a single direction.
///
/// Values are added at the back with [`enqueue`](Queue::enqueue) and taken from the front with
/// [`dequeue`](Queue::dequeue). Both are `O(1)`, as is everything else except `clear`, `Clone`
/// and the comparison traits, which are all `O(n)`.
///
/// Taking from an empty Queue isn't an error condition on its own: `dequeue` returns [`None`],
/// while [`try_dequeue`](Queue::try_dequeue) reports [`EmptyCollection`] for callers that want
/// to propagate it.
///
/// # Examples
/// ```
/// # use value_collections::collections::linked::Queue;
/// let mut queue = Queue::new();
/// queue.enqueue("first");
/// queue.enqueue("second");
///
/// assert_eq!(queue.peek(), Some(&"first"));
/// assert_eq!(queue.dequeue(), Some("first"));
/// assert_eq!(queue.dequeue(), Some("second"));
/// assert_eq!(queue.dequeue(), None);
/// ```
pub struct Queue<T> {
    pub(crate) state: QueueState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

pub(crate) enum QueueState<T> {
    Empty,
    Full(QueueContents<T>),
}

use QueueState::*;

pub(crate) struct QueueContents<T> {
    pub len: Length,
    pub head: NonNull<QueueNode<T>>,
    pub tail: NonNull<QueueNode<T>>,
}

pub(crate) struct QueueNode<T> {
    pub value: T,
    pub next: Option<NonNull<QueueNode<T>>>,
}

impl<T> QueueNode<T> {
    fn leak(value: T) -> NonNull<QueueNode<T>> {
        NonNull::from(Box::leak(Box::new(QueueNode { value, next: None })))
    }
}

impl<T> Queue<T> {
    /// Creates a new Queue with no elements.
    pub const fn new() -> Queue<T> {
        Queue {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Queue holding `len` elements, each constructed by calling `f`. The first
    /// element constructed is the first to be dequeued.
    pub fn from_fn<F: FnMut() -> T>(len: usize, mut f: F) -> Queue<T> {
        let mut queue = Queue::new();
        for _ in 0..len {
            queue.enqueue(f());
        }
        queue
    }

    /// Returns the number of elements in the Queue.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(QueueContents { len, .. }) => len.get(),
        }
    }

    /// Returns true if the Queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        matches!(self.state, Empty)
    }

    /// Adds `value` to the back of the Queue.
    ///
    /// # Panics
    /// Panics if the length of the Queue would overflow a [`usize`].
    pub fn enqueue(&mut self, value: T) {
        match &mut self.state {
            Empty => {
                let node = QueueNode::leak(value);
                self.state = Full(QueueContents {
                    len: ONE,
                    head: node,
                    tail: node,
                });
            },
            Full(QueueContents { len, tail, .. }) => {
                *len = len.increment();
                let node = QueueNode::leak(value);

                // SAFETY: The tail is a live node owned by this queue, and nothing else holds a
                // reference into it while the queue is mutably borrowed.
                unsafe { (*tail.as_ptr()).next = Some(node); }
                *tail = node;
            },
        }
    }

    /// Removes the element at the front of the Queue and returns it, or returns [`None`] if the
    /// Queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(QueueContents { len, head, .. }) => {
                // SAFETY: The head was allocated by QueueNode::leak and is unlinked below, so it
                // is freed exactly once.
                let node = unsafe { *Box::from_raw(head.as_ptr()) };

                match (len.decrement(), node.next) {
                    (Some(new_len), Some(new_head)) => {
                        *head = new_head;
                        *len = new_len;
                    },
                    _ => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes the element at the front of the Queue and returns it, returning an [`Err`] if the
    /// Queue is empty.
    pub fn try_dequeue(&mut self) -> Result<T, EmptyCollection> {
        self.dequeue().ok_or(EmptyCollection)
    }

    /// Returns a reference to the element at the front of the Queue, without removing it.
    pub fn peek(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            // SAFETY: The head is live for as long as the queue is borrowed.
            Full(QueueContents { head, .. }) => Some(unsafe { &(*head.as_ptr()).value }),
        }
    }

    /// Returns a mutable reference to the element at the front of the Queue, without removing it.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            Empty => None,
            // SAFETY: The head is live and exclusively borrowed along with the queue.
            Full(QueueContents { head, .. }) => Some(unsafe { &mut (*head.as_ptr()).value }),
        }
    }

    /// Returns a reference to the element at the front of the Queue, panicking if it is empty.
    ///
    /// # Panics
    /// Panics if the Queue is empty.
    pub fn front(&self) -> &T {
        self.peek().ok_or(EmptyCollection).throw()
    }

    /// Removes all elements from the Queue.
    pub fn clear(&mut self) {
        drop(mem::take(self));
    }

    /// Returns an iterator over references to the elements, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Clone> Queue<T> {
    /// Creates a new Queue holding `len` clones of `value`.
    pub fn filled(len: usize, value: T) -> Queue<T> {
        Queue::from_fn(len, || value.clone())
    }
}

impl<T: PartialEq> Queue<T> {
    /// Returns true if any element of the Queue is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        while self.dequeue().is_some() {}
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: Hash> Hash for Queue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

// SAFETY: Queues exclusively own their nodes, so they are Send when T is.
unsafe impl<T: Send> Send for Queue<T> {}
// SAFETY: The safe API only hands out shared references through &self.
unsafe impl<T: Sync> Sync for Queue<T> {}
