use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::sync::atomic::{self, AtomicU64};

static NEXT_EPOCH: AtomicU64 = AtomicU64::new(1);

/// An identifier for one particular layout of one particular
/// [`DynamicArray`](super::DynamicArray). A new Epoch is drawn whenever an array is created,
/// reallocated or has elements shifted or removed, so no two layouts ever share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Epoch(u64);

impl Epoch {
    pub(crate) fn fresh() -> Epoch {
        // Only uniqueness matters here, so no ordering with other memory operations is required.
        Epoch(NEXT_EPOCH.fetch_add(1, atomic::Ordering::Relaxed))
    }
}

/// A lightweight handle to a slot within a [`DynamicArray`](super::DynamicArray), acting as the
/// array's random-access iterator.
///
/// A Position doesn't borrow the array it came from, it just records an index and the epoch of
/// the array at the time it was created. Stepping and offsetting a Position is unchecked and can
/// produce indices outside of the array, but every access through the array is checked:
/// - An index outside of the array produces an
///   [`IndexOutOfBounds`](crate::collections::IndexOutOfBounds) error.
/// - A Position that outlived a reallocation, insertion or removal, or that came from another
///   array, produces a [`StalePosition`](crate::collections::StalePosition) error.
///
/// Pushing onto an array without reallocating keeps existing Positions valid. Every other change
/// to the array's layout invalidates all of its Positions at once, including those before the
/// changed index that still point at the same element. Callers should treat any Position as
/// consumed by an insert, erase, remove or pop, and use the Position returned by the operation
/// instead.
///
/// # Examples
/// ```
/// # use value_collections::collections::contiguous::DynamicArray;
/// let mut arr = DynamicArray::from([1, 2, 3]);
/// let mut pos = arr.begin();
/// pos += 2;
/// assert_eq!(arr.get_at(pos), &3);
/// assert_eq!(pos.next(), arr.end());
///
/// arr.insert(arr.begin(), 0);
/// assert!(arr.try_get_at(pos).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) index: usize,
    pub(crate) epoch: Epoch,
}

impl Position {
    pub(crate) const fn new(index: usize, epoch: Epoch) -> Position {
        Position {
            index,
            epoch,
        }
    }

    /// Returns the index of the slot that this Position refers to.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns a Position one slot further along the array.
    pub const fn next(self) -> Position {
        Position::new(self.index.wrapping_add(1), self.epoch)
    }

    /// Returns a Position one slot back towards the start of the array. Stepping back from the
    /// first slot produces a Position that is out of bounds, rather than panicking.
    pub const fn prev(self) -> Position {
        Position::new(self.index.wrapping_sub(1), self.epoch)
    }

    /// Returns the signed distance from `origin` to self, if both Positions refer to the same
    /// array in the same epoch.
    pub const fn offset_from(self, origin: Position) -> Option<isize> {
        if self.epoch.0 == origin.epoch.0 {
            Some(self.index.wrapping_sub(origin.index) as isize)
        } else {
            None
        }
    }

    /// Returns true if both Positions were produced by the same array, without any invalidating
    /// operations in between.
    pub fn is_comparable(&self, other: &Position) -> bool {
        self.epoch == other.epoch
    }
}

impl PartialOrd for Position {
    /// Positions are only ordered relative to other Positions from the same epoch.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_comparable(other) {
            Some(self.index.cmp(&other.index))
        } else {
            None
        }
    }
}

impl Add<usize> for Position {
    type Output = Position;

    fn add(self, rhs: usize) -> Self::Output {
        Position::new(self.index.wrapping_add(rhs), self.epoch)
    }
}

impl AddAssign<usize> for Position {
    fn add_assign(&mut self, rhs: usize) {
        *self = *self + rhs;
    }
}

impl Sub<usize> for Position {
    type Output = Position;

    fn sub(self, rhs: usize) -> Self::Output {
        Position::new(self.index.wrapping_sub(rhs), self.epoch)
    }
}

impl SubAssign<usize> for Position {
    fn sub_assign(&mut self, rhs: usize) {
        *self = *self - rhs;
    }
}
