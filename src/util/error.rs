use std::alloc::Layout;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index (or the index of a [`Position`](crate::collections::contiguous::Position)) fell
/// outside of the range of valid indices for the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A [`Position`](crate::collections::contiguous::Position) was used after the array it came from
/// was reallocated or had its elements shifted, or it was used with a different array entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StalePosition;

impl Display for StalePosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Position no longer refers to the current state of the array!")
    }
}

impl Error for StalePosition {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// The global allocator was unable to provide memory for the given [`Layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocFailure {
    pub layout: Layout,
}

impl Display for AllocFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to allocate {} bytes!", self.layout.size())
    }
}

impl Error for AllocFailure {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCollection;

impl Display for EmptyCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Attempted to take a value from an empty collection!")
    }
}

impl Error for EmptyCollection {}

/// The reasons that a [`Position`](crate::collections::contiguous::Position) can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum PositionError {
    IndexOutOfBounds(IndexOutOfBounds),
    StalePosition(StalePosition),
}

/// The reasons that a change in capacity can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum ReserveError {
    CapacityOverflow(CapacityOverflow),
    AllocFailure(AllocFailure),
}
