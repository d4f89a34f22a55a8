use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::slice;

use super::{Epoch, Position};
use crate::collections::contiguous::slots::{handle_reserve, Slots};
use crate::util::error::{CapacityOverflow, IndexOutOfBounds, PositionError, ReserveError, StalePosition};
use crate::util::result::ResultExtension;

/// Each time a full DynamicArray grows, it gains `cap / GROWTH_DIVISOR + GROWTH_BIAS` slots. The
/// bias guarantees growth from a capacity of 0.
const GROWTH_DIVISOR: usize = 2;
const GROWTH_BIAS: usize = 1;

/// A growable, contiguous collection that manages its own storage, tracking the number of live
/// elements separately from the number of allocated slots.
///
/// The first `len` slots always hold live values, while the remaining `cap - len` slots are
/// uninitialized memory which is never read or dropped. Growth on demand multiplies the capacity
/// by roughly 1.5, giving amortized `O(1)` pushes. All other capacity changes are exact.
///
/// Borrowed iteration and unchecked indexing are provided through [`Deref<Target = [T]>`](Deref).
/// For a position handle that can be held across mutation, see [`Position`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `get_at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)`, `O(n)`* |
/// | `erase` | `O(n-i)` |
/// | `reserve` | `O(n)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `resize` | `O(n)` |
///
/// \* If the DynamicArray doesn't have enough capacity for the new element, it is reallocated
/// first, which takes `O(n)`.
pub struct DynamicArray<T> {
    pub(crate) slots: Slots<T>,
    pub(crate) len: usize,
    pub(crate) epoch: Epoch,
}

impl<T> DynamicArray<T> {
    /// Creates a new DynamicArray with length and capacity 0. Memory will be allocated when the
    /// capacity changes.
    ///
    /// # Examples
    /// ```
    /// # use value_collections::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 0);
    /// ```
    pub fn new() -> DynamicArray<T> {
        DynamicArray {
            slots: Slots::new(),
            len: 0,
            epoch: Epoch::fresh(),
        }
    }

    /// Creates a new DynamicArray with capacity exactly equal to the provided value, allowing
    /// values to be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use value_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<u8> = DynamicArray::with_cap(5);
    /// assert_eq!(arr.cap(), 5);
    /// arr.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(arr.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> DynamicArray<T> {
        DynamicArray {
            slots: Slots::with_cap(cap),
            len: 0,
            epoch: Epoch::fresh(),
        }
    }

    /// Creates a new DynamicArray with exactly `len` elements and the same capacity, constructing
    /// each element in place by calling `f`.
    ///
    /// If `f` panics, the elements constructed so far are dropped and the allocation is freed.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use value_collections::collections::contiguous::DynamicArray;
    /// let mut next = 0;
    /// let arr = DynamicArray::from_fn(4, || { next += 2; next });
    /// assert_eq!(&*arr, &[2, 4, 6, 8]);
    /// assert_eq!(arr.cap(), 4);
    /// ```
    pub fn from_fn<F: FnMut() -> T>(len: usize, mut f: F) -> DynamicArray<T> {
        let mut arr = DynamicArray::with_cap(len);

        for _ in 0..len {
            // SAFETY: arr has been created with the right capacity.
            unsafe { arr.push_unchecked(f()); }
        }

        arr
    }

    /// Returns the number of live elements in the DynamicArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynamicArray contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use value_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<u8> = DynamicArray::new();
    /// assert!(arr.is_empty());
    /// arr.push(1);
    /// assert!(!arr.is_empty())
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots, live or not. The capacity is always exactly the
    /// value last requested through a constructor or capacity method, or the result of growth.
    pub const fn cap(&self) -> usize {
        self.slots.cap()
    }

    /// Returns a reference to the element at `index`, or an error if `index` is not less than the
    /// length of the DynamicArray.
    ///
    /// Unchecked access is available through the slice methods, such as
    /// [`get_unchecked`](slice::get_unchecked).
    ///
    /// # Examples
    /// ```
    /// # use value_collections::collections::contiguous::DynamicArray;
    /// let arr = DynamicArray::from([10, 20]);
    /// assert_eq!(arr.at(1), Ok(&20));
    /// assert!(arr.at(2).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len, so the slot is initialized.
        Ok(unsafe { self.slots[index].assume_init_ref() })
    }

    /// Returns a mutable reference to the element at `index`, or an error if `index` is not less
    /// than the length of the DynamicArray.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len, so the slot is initialized.
        Ok(unsafe { self.slots[index].assume_init_mut() })
    }

    /// Push the provided value onto the end of the DynamicArray, growing the capacity if
    /// required. Existing [`Position`]s remain valid unless the DynamicArray was full.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use value_collections::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::<u8>::new();
    /// for i in 0..=5 {
    ///     arr.push(i);
    /// }
    /// assert_eq!(&*arr, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        self.grow_if_full();
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Constructs a new value in place at the end of the DynamicArray by calling `f`, growing the
    /// capacity beforehand if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    pub fn push_with<F: FnOnce() -> T>(&mut self, f: F) {
        self.grow_if_full();
        // SAFETY: As above.
        unsafe { self.push_unchecked(f()) }
    }

    /// Push the provided value onto the end of the DynamicArray, assuming that there is enough
    /// capacity to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the DynamicArray has enough capacity to add the
    /// provided value, using methods like [`reserve`](DynamicArray::reserve) or
    /// [`with_cap`](DynamicArray::with_cap) to do so. Using this method on a DynamicArray without
    /// enough capacity is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the DynamicArray has enough capacity for
        // this push.
        unsafe { self.slots.write(self.len, value); }
        self.len += 1;
    }

    /// Pops the last value off the end of the DynamicArray, returning an owned value if the
    /// DynamicArray has length greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use value_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = (0..5).collect();
    /// for i in (0..arr.len()).rev() {
    ///     assert_eq!(arr.pop(), Some(i));
    /// }
    /// assert_eq!(arr.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading.
            self.len -= 1;
            self.renew_epoch();

            // SAFETY: The slot at the old last index is initialized, and is treated as
            // uninitialized from here on because len has already been decremented.
            Some(unsafe { self.slots.read(self.len) })
        }
    }

    /// Drops the last element of the DynamicArray. Does nothing if the DynamicArray is empty.
    pub fn pop_back(&mut self) {
        drop(self.pop());
    }

    /// Shortens the DynamicArray to `len` elements, dropping the rest. Has no effect if the
    /// DynamicArray is already no longer than `len`. The capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        self.renew_epoch();
        while self.len > len {
            self.len -= 1;
            // SAFETY: The slot at the old last index is initialized and is no longer counted as
            // live, so it won't be dropped again even if this drop panics.
            unsafe { self.slots.drop_in_place(self.len); }
        }
    }

    /// Drops all elements, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes the DynamicArray to exactly `new_len` elements. Shrinking drops the elements past
    /// `new_len`, while growing appends clones of `value`, reserving exactly `new_len` slots first
    /// if the current capacity is insufficient.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use value_collections::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from([10, 20, 30]);
    /// arr.resize(5, 0);
    /// assert_eq!(&*arr, &[10, 20, 30, 0, 0]);
    /// arr.resize(1, 0);
    /// assert_eq!(&*arr, &[10]);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        self.resize_with(new_len, || value.clone());
    }

    /// Resizes the DynamicArray to exactly `new_len` elements, constructing any new elements in
    /// place by calling `f`.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) {
        if new_len < self.len {
            self.truncate(new_len);
            return;
        }

        if new_len > self.cap() {
            self.reserve(new_len);
        }

        while self.len < new_len {
            // SAFETY: The capacity is at least new_len.
            unsafe { self.push_unchecked(f()); }
        }
    }

    /// Changes the capacity of the DynamicArray to exactly `new_cap`, moving all live elements
    /// into a new allocation. If `new_cap` is less than the current length, the elements past
    /// `new_cap` are dropped first.
    ///
    /// All [`Position`]s are invalidated, unless the capacity is already equal to `new_cap`, in
    /// which case nothing happens.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use value_collections::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from([1, 2, 3, 4]);
    /// arr.reserve(10);
    /// assert_eq!(arr.cap(), 10);
    /// arr.reserve(2);
    /// assert_eq!(&*arr, &[1, 2]);
    /// assert_eq!(arr.cap(), 2);
    /// ```
    pub fn reserve(&mut self, new_cap: usize) {
        handle_reserve(self.try_reserve(new_cap));
    }

    /// Changes the capacity of the DynamicArray to exactly `new_cap`, as with
    /// [`reserve`](DynamicArray::reserve), returning an error rather than panicking or aborting.
    ///
    /// The new allocation is made before anything else is touched, so on failure the DynamicArray
    /// is left exactly as it was.
    pub fn try_reserve(&mut self, new_cap: usize) -> Result<(), ReserveError> {
        if new_cap == self.cap() {
            return Ok(());
        }

        let mut new_slots = Slots::try_with_cap(new_cap)?;

        if new_cap < self.len {
            #[cfg(feature = "log")]
            log::debug!(
                "narrowing dynamic array to {} slots discards {} elements",
                new_cap,
                self.len - new_cap
            );
            self.truncate(new_cap);
        }

        #[cfg(feature = "log")]
        log::trace!(
            "reallocating dynamic array storage from {} to {} slots ({} live)",
            self.cap(),
            new_cap,
            self.len
        );

        // SAFETY: len <= new_cap after truncation, and the old slots are dropped without reading
        // them again.
        unsafe { self.slots.relocate_into(&mut new_slots, self.len); }
        // The old block only holds MaybeUninit values, so this frees it without dropping anything.
        self.slots = new_slots;
        self.renew_epoch();

        Ok(())
    }

    /// Ensures that the DynamicArray has capacity to hold an additional `extra` elements. Unlike
    /// [`reserve`](DynamicArray::reserve), this never reduces the capacity.
    ///
    /// When the DynamicArray does have to grow, it grows by at least the usual growth step, so
    /// repeated small calls stay amortized `O(1)` per element.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use value_collections::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from([1, 2, 3, 4]);
    /// arr.reserve_extra(1);
    /// assert_eq!(arr.cap(), 7);
    /// arr.reserve_extra(10);
    /// assert_eq!(arr.cap(), 14);
    /// ```
    pub fn reserve_extra(&mut self, extra: usize) {
        let required = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();

        if required > self.cap() {
            let grown = DynamicArray::<T>::grown_cap(self.cap()).unwrap_or(required);
            self.reserve(required.max(grown));
        }
    }

    /// Shrinks the DynamicArray so that its capacity is equal to its length.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    pub fn shrink_to_fit(&mut self) {
        self.reserve(self.len);
    }

    /// Returns a [`Position`] referring to the first slot of the DynamicArray.
    pub const fn begin(&self) -> Position {
        Position::new(0, self.epoch)
    }

    /// Returns a [`Position`] referring to the slot just past the last element of the
    /// DynamicArray.
    pub const fn end(&self) -> Position {
        Position::new(self.len, self.epoch)
    }

    /// Returns a [`Position`] referring to the slot at `index`. The index isn't checked until the
    /// Position is used.
    pub const fn position(&self, index: usize) -> Position {
        Position::new(index, self.epoch)
    }

    /// Returns a reference to the element referred to by `pos`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `pos` is stale or out of bounds of the DynamicArray.
    pub fn get_at(&self, pos: Position) -> &T {
        self.try_get_at(pos).throw()
    }

    /// Returns a reference to the element referred to by `pos`, returning an [`Err`] on a failure
    /// rather than panicking.
    pub fn try_get_at(&self, pos: Position) -> Result<&T, PositionError> {
        self.check_epoch(pos)?;
        Ok(self.at(pos.index)?)
    }

    /// Returns a mutable reference to the element referred to by `pos`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `pos` is stale or out of bounds of the DynamicArray.
    pub fn get_at_mut(&mut self, pos: Position) -> &mut T {
        self.try_get_at_mut(pos).throw()
    }

    /// Returns a mutable reference to the element referred to by `pos`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get_at_mut(&mut self, pos: Position) -> Result<&mut T, PositionError> {
        self.check_epoch(pos)?;
        Ok(self.at_mut(pos.index)?)
    }

    /// Inserts the provided value at `pos`, moving all following elements one slot towards the
    /// end and growing if necessary. Inserting at [`end`](DynamicArray::end) is equivalent to a
    /// push.
    ///
    /// Returns a fresh [`Position`] referring to the inserted element. All other Positions are
    /// invalidated.
    ///
    /// # Panics
    /// Panics if `pos` is stale or its index is greater than the length of the DynamicArray.
    ///
    /// # Examples
    /// ```
    /// # use value_collections::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from([0, 1, 2]);
    /// let pos = arr.insert(arr.position(1), 100);
    /// let pos = arr.insert(pos, 200);
    /// arr.insert(pos + 2, 300);
    /// assert_eq!(&*arr, &[0, 200, 100, 300, 1, 2]);
    /// ```
    pub fn insert(&mut self, pos: Position, value: T) -> Position {
        self.try_insert(pos, value).throw()
    }

    /// Inserts the provided value at `pos`, as with [`insert`](DynamicArray::insert), returning
    /// an [`Err`] rather than panicking. The DynamicArray is unmodified on failure.
    pub fn try_insert(&mut self, pos: Position, value: T) -> Result<Position, PositionError> {
        self.check_epoch(pos)?;
        let index = pos.index;
        if index > self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            }.into());
        }

        self.grow_if_full();

        // Shuffle every value from index onwards one slot along, ending by moving the contents of
        // the first free slot (uninitialized) into prev.
        let mut prev = MaybeUninit::new(value);
        for i in index..=self.len {
            prev = mem::replace(&mut self.slots[i], prev);
        }

        self.len += 1;
        self.renew_epoch();

        Ok(self.position(index))
    }

    /// Drops the element at `pos`, moving all following elements one slot towards the start.
    ///
    /// Returns a fresh [`Position`] referring to the element that now occupies the erased slot,
    /// which is [`end`](DynamicArray::end) if the erased element was the last. All other
    /// Positions are invalidated.
    ///
    /// # Panics
    /// Panics if `pos` is stale or doesn't refer to an element.
    ///
    /// # Examples
    /// ```
    /// # use value_collections::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from([1, 2, 3]);
    /// let next = arr.erase(arr.begin());
    /// assert_eq!(arr.get_at(next), &2);
    /// let next = arr.erase(next.next());
    /// assert_eq!(next, arr.end());
    /// assert_eq!(&*arr, &[2]);
    /// ```
    pub fn erase(&mut self, pos: Position) -> Position {
        self.try_erase(pos).throw()
    }

    /// Drops the element at `pos`, as with [`erase`](DynamicArray::erase), returning an [`Err`]
    /// rather than panicking. The DynamicArray is unmodified on failure.
    pub fn try_erase(&mut self, pos: Position) -> Result<Position, PositionError> {
        self.check_epoch(pos)?;
        let value = self.try_remove(pos.index)?;
        // Drop only once the DynamicArray is consistent again.
        drop(value);
        Ok(self.position(pos.index))
    }

    /// Removes and returns the element at the provided index, moving all following values to fill
    /// in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use value_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = "Hello world!".chars().collect();
    /// assert_eq!(arr.remove(1), 'e');
    /// assert_eq!(arr.remove(4), ' ');
    /// assert_eq!(arr, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at the provided index, returning an [`Err`] rather than
    /// panicking if the index is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        let mut next = MaybeUninit::uninit();
        // Iterate backwards to index.
        for i in (index..self.len).rev() {
            next = mem::replace(&mut self.slots[i], next);
        }

        self.len -= 1;
        self.renew_epoch();

        // SAFETY: next contains the value which was previously located at index, which we've
        // already checked to be less than len and therefore initialized.
        Ok(unsafe { next.assume_init() })
    }

    /// Grows the DynamicArray if it is full, so that it can take at least one more element.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    pub(crate) fn grow_if_full(&mut self) {
        if self.len == self.cap() {
            let new_cap = DynamicArray::<T>::grown_cap(self.cap())
                .ok_or(CapacityOverflow)
                .throw();
            self.reserve(new_cap);
        }
    }

    /// The capacity that a full DynamicArray of capacity `cap` grows to.
    pub(crate) const fn grown_cap(cap: usize) -> Option<usize> {
        match cap.checked_add(cap / GROWTH_DIVISOR) {
            Some(val) => val.checked_add(GROWTH_BIAS),
            None => None,
        }
    }

    /// Checks that the provided index refers to a live element.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    /// Checks that `pos` was produced by self, since the last invalidating operation.
    pub(crate) fn check_epoch(&self, pos: Position) -> Result<(), StalePosition> {
        if pos.epoch == self.epoch {
            Ok(())
        } else {
            Err(StalePosition)
        }
    }

    /// Invalidates all outstanding [`Position`]s.
    pub(crate) fn renew_epoch(&mut self) {
        self.epoch = Epoch::fresh();
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Creates a new DynamicArray with exactly `len` clones of `value` and the same capacity.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use value_collections::collections::contiguous::DynamicArray;
    /// let arr = DynamicArray::filled(3, "ea");
    /// assert_eq!(&*arr, &["ea", "ea", "ea"]);
    /// assert_eq!(arr.cap(), 3);
    /// ```
    pub fn filled(len: usize, value: T) -> DynamicArray<T> {
        DynamicArray::from_fn(len, || value.clone())
    }
}

impl<T: Default> DynamicArray<T> {
    /// Creates a new DynamicArray by repeating the default value of `T` `len` times.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn repeat_default(len: usize) -> DynamicArray<T> {
        DynamicArray::from_fn(len, T::default)
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        self.reserve_extra(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut arr = DynamicArray::with_cap(iter.size_hint().0);

        for item in iter {
            arr.push(item);
        }

        arr
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(value: [T; N]) -> Self {
        let mut arr = DynamicArray::with_cap(N);

        for item in value {
            // SAFETY: arr has been created with the right capacity.
            unsafe { arr.push_unchecked(item); }
        }

        arr
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // Call drop on all initialized values in place.
        for i in 0..self.len {
            // SAFETY: All values less than len are initialized and safe to drop.
            unsafe { self.slots.drop_in_place(i); }
        }

        // Implicitly drop self.slots, which holds only MaybeUninit values and deallocates the
        // owned memory.
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: DynamicArray is valid as a slice for len values, which are all initialized. The
        // pointer is nonnull, properly aligned and the range entirely contained within the
        // allocation. The total size is <= isize::MAX as the result of being a valid Layout.
        unsafe { slice::from_raw_parts(self.slots.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As above, with exclusive access guaranteed by &mut self.
        unsafe { slice::from_raw_parts_mut(self.slots.as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    /// Creates an independent copy with the same capacity, cloning each live element in order.
    /// If a clone panics, the partial copy is dropped without leaking.
    fn clone(&self) -> Self {
        let mut arr = Self::with_cap(self.cap());

        for value in self.iter() {
            // SAFETY: arr has the same capacity as self, which holds at least len values.
            unsafe { arr.push_unchecked(value.clone()); }
        }

        arr
    }

    /// Replaces the contents of self with clones of the contents of `source`, adopting its
    /// capacity. The copy is fully built before the old contents are dropped, so a panicking
    /// clone leaves self untouched. All [`Position`]s into self are invalidated.
    fn clone_from(&mut self, source: &Self) {
        let copy = source.clone();
        *self = copy;
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
