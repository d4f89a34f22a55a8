//! The raw storage block backing [`DynamicArray`](super::DynamicArray).
//!
//! [`Slots`] owns an allocation of `cap` [`MaybeUninit<T>`](std::mem::MaybeUninit) cells and never
//! reads, writes or drops them by itself. Which cells are live is tracked entirely by the owner.

mod slots;

pub(crate) use slots::*;
