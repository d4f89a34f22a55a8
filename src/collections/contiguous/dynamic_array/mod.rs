//! A module containing [`DynamicArray`] and associated types.
//!
//! Alongside the array itself, this module provides [`Position`], a checked handle to a slot of an
//! array that can be stepped and offset like a random-access iterator, and [`IntoIter`] for owned
//! iteration. [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`]
//! are used for borrowed iteration.
//!
//! [`DynamicArray`] and [`Position`] are also re-exported under the parent module.

mod dynamic_array;
mod iter;
mod position;
mod props;
mod tests;

pub use dynamic_array::*;
pub use iter::*;
pub use position::*;
