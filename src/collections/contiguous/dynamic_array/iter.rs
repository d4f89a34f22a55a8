use std::iter::FusedIterator;
use std::mem;

use super::DynamicArray;
use crate::collections::contiguous::slots::Slots;

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let slots = mem::replace(&mut self.slots, Slots::new());
        let end = self.len;
        // Ownership of the live values moves to the iterator along with the slots.
        self.len = 0;

        IntoIter {
            slots,
            start: 0,
            end,
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;

    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`DynamicArray`]. See [`DynamicArray::into_iter`].
///
/// The iterator holds the array's storage, so any values that aren't yielded are dropped along
/// with it.
pub struct IntoIter<T> {
    // Slots in start..end are initialized, all others have been moved out or were never live.
    pub(crate) slots: Slots<T>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.start..self.end {
            // SAFETY: Every slot in start..end is initialized and hasn't been yielded.
            unsafe { self.slots.drop_in_place(i); }
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: The slot at start is initialized. Incrementing start means it is never
            // read again, effectively moving the value out of the allocation.
            let value = unsafe { self.slots.read(self.start) };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The slot at the newly decremented end is initialized and won't be read
            // again.
            Some(unsafe { self.slots.read(self.end) })
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}
