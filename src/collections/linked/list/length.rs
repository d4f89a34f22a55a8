use std::num::NonZero;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// The length of a non-empty linked collection.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

impl Length {
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Returns the Length after adding one more node.
    ///
    /// # Panics
    /// Panics if the length would overflow a [`usize`].
    pub fn increment(self) -> Length {
        self.checked_add(1).ok_or(CapacityOverflow).throw()
    }

    /// Returns the Length after removing one node, or None if the collection would become empty.
    pub const fn decrement(self) -> Option<Length> {
        Length::new(self.get() - 1)
    }

    pub const fn checked_add(self, other: usize) -> Option<Length> {
        match self.0.checked_add(other) {
            Some(res) => Some(Length(res)),
            None => None,
        }
    }

    pub const fn new(value: usize) -> Option<Length> {
        match NonZero::new(value) {
            Some(res) => Some(Length(res)),
            None => None,
        }
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);
