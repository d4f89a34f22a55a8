//! Various general-purpose, value-semantic collection types.
//!
//! # Method
//! [`DynamicArray`](contiguous::DynamicArray) implements [`Deref<Target = [T]>`](std::ops::Deref)
//! (and DerefMut), which provides borrowed iteration and slice methods for free. The linked types
//! implement their own iterators.
//!
//! # Errors
//! Fallible operations come in pairs: a `try_` method returning one of the error types below, and
//! a panicking method that uses the error's message.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;

#[doc(inline)]
pub use crate::util::error::{
    AllocFailure, CapacityOverflow, EmptyCollection, IndexOutOfBounds, PositionError, ReserveError,
    StalePosition,
};
