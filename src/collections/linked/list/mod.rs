//! A module containing [`LinkedList`] and associated types.
//!
//! Alongside the list itself, this module provides [`Iter`], [`IterMut`] and [`IntoIter`] for
//! borrowed and owned iteration in both directions.

mod iter;
mod length;
mod linked_list;
mod node;

pub use iter::*;
pub(crate) use length::*;
pub use linked_list::*;
pub(crate) use node::*;
