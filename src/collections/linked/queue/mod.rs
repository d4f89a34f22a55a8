//! A module containing [`Queue`], a first-in first-out collection, and its iterators.

mod iter;
mod queue;
mod tests;

pub use iter::*;
pub use queue::*;
