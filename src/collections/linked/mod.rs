//! Linked collection types: the doubly linked [`LinkedList`] and the singly linked [`Queue`].
//!
//! Both store every element in its own heap allocation, so references to elements stay valid
//! while the collection grows.

pub mod list;
pub mod queue;

#[doc(inline)]
pub use list::LinkedList;
#[doc(inline)]
pub use queue::Queue;
