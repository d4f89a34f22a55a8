//! Contiguous collection types. Namely [`DynamicArray`], a growable array that manages its own
//! storage, and the [`Position`] handles used to refer into it.
#![warn(missing_docs)]

pub mod dynamic_array;
pub(crate) mod slots;

#[doc(inline)]
pub use dynamic_array::{DynamicArray, Position};
