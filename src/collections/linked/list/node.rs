use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated with Box<T> rather than alloc, because Box<T> has the special property
// that dereferencing it allows a value to be moved out of the heap.

/// A copyable pointer to a heap allocated [`Node`]. Ownership of the node belongs to the list
/// that links it, never to the pointer itself.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Deallocates the node, moving it back onto the stack.
    ///
    /// # Safety
    /// The node must still be allocated and no other NodePtr to it may be used afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The node was allocated by Box::new in from_node and hasn't been freed yet.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: Every NodePtr held by a list refers to a live node. The list's borrow rules
        // determine how long the reference may actually be held.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: As above, with exclusive access granted by the list.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: As above.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As above.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: As above.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As above.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}
