use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
use std::slice;

use crate::util::error::{AllocFailure, CapacityOverflow, ReserveError};
use crate::util::result::ResultExtension;

/// An owned, fixed-capacity block of possibly uninitialized slots of `T`. Similar to a
/// `Box<[MaybeUninit<T>]>`, with fallible allocation.
///
/// A block with capacity 0, or any block of a zero-sized `T`, holds a dangling pointer and is
/// never passed to the allocator.
pub(crate) struct Slots<T> {
    pub(crate) ptr: NonNull<MaybeUninit<T>>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Slots<T> {
    /// Creates an empty block without allocating.
    pub(crate) const fn new() -> Slots<T> {
        Slots {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates a block of exactly `cap` slots.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`]. Allocation failure is handled by
    /// [`alloc::handle_alloc_error`].
    pub(crate) fn with_cap(cap: usize) -> Slots<T> {
        handle_reserve(Slots::try_with_cap(cap))
    }

    /// Allocates a block of exactly `cap` slots, returning an error rather than panicking or
    /// aborting if the allocation can't be made.
    pub(crate) fn try_with_cap(cap: usize) -> Result<Slots<T>, ReserveError> {
        let layout = Slots::<T>::make_layout(cap)?;

        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: Zero-sized layouts have been guarded against.
            let raw_ptr: *mut MaybeUninit<T> = unsafe { alloc::alloc(layout).cast() };
            NonNull::new(raw_ptr).ok_or(AllocFailure { layout })?
        };

        Ok(Slots {
            ptr,
            cap,
            _phantom: PhantomData,
        })
    }

    pub(crate) const fn cap(&self) -> usize {
        self.cap
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `cap` number
    /// of elements of type `T`.
    pub(crate) fn make_layout(cap: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow)
    }

    /// Writes `value` into the slot at `index` without reading or dropping the previous contents.
    ///
    /// # Safety
    /// `index` must be less than the capacity of the block. Any value previously held in the slot
    /// is leaked rather than dropped.
    pub(crate) unsafe fn write(&mut self, index: usize, value: T) {
        // SAFETY: The caller guarantees that index is in bounds of the allocation.
        unsafe { self.ptr.add(index).write(MaybeUninit::new(value)); }
    }

    /// Moves the value out of the slot at `index`, leaving the slot logically uninitialized.
    ///
    /// # Safety
    /// `index` must be less than the capacity of the block and the slot must be initialized. The
    /// slot must be treated as uninitialized afterwards.
    pub(crate) unsafe fn read(&self, index: usize) -> T {
        // SAFETY: The caller guarantees that the slot is in bounds and initialized.
        unsafe { self.ptr.add(index).read().assume_init() }
    }

    /// Drops the value in the slot at `index` in place.
    ///
    /// # Safety
    /// `index` must be less than the capacity of the block and the slot must be initialized. The
    /// slot must be treated as uninitialized afterwards.
    pub(crate) unsafe fn drop_in_place(&mut self, index: usize) {
        // SAFETY: The caller guarantees that the slot is in bounds and initialized.
        unsafe { self.ptr.add(index).as_mut().assume_init_drop(); }
    }

    /// Moves the first `len` slots of self into `dest` with a single bitwise copy. Afterwards,
    /// those slots in self must be treated as uninitialized.
    ///
    /// # Safety
    /// `len` must not exceed the capacity of either block. The two blocks can't overlap, which is
    /// guaranteed for two distinct owned blocks.
    pub(crate) unsafe fn relocate_into(&mut self, dest: &mut Slots<T>, len: usize) {
        // SAFETY: Both pointers are valid and aligned for len values, as upheld by the caller.
        unsafe {
            self.ptr.copy_to_nonoverlapping(dest.ptr, len);
        }
    }

    /// Returns a pointer to the first slot, cast to `T`.
    pub(crate) const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr().cast()
    }
}

/// Unwraps the result of a capacity change, panicking on [`CapacityOverflow`] and deferring to
/// [`alloc::handle_alloc_error`] on [`AllocFailure`].
pub(crate) fn handle_reserve<T>(result: Result<T, ReserveError>) -> T {
    match result {
        Ok(value) => value,
        Err(ReserveError::AllocFailure(AllocFailure { layout })) => alloc::handle_alloc_error(layout),
        Err(ReserveError::CapacityOverflow(error)) => Err::<T, _>(error).throw(),
    }
}

impl<T> Drop for Slots<T> {
    fn drop(&mut self) {
        // The slots contain only MaybeUninit values, so the owner is responsible for dropping any
        // live values before this point. All that remains is the allocation itself.
        let Ok(layout) = Slots::<T>::make_layout(self.cap) else {
            return;
        };

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout); }
        }
    }
}

impl<T> Deref for Slots<T> {
    type Target = [MaybeUninit<T>];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(cap) and is therefore valid and properly
        // aligned for cap MaybeUninit<T> values, which need no initialization.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.cap) }
    }
}

impl<T> DerefMut for Slots<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As above, with exclusive access guaranteed by &mut self.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.cap) }
    }
}

// SAFETY: Slots rely on a unique pointer and are therefore safe for Send when T: Send.
unsafe impl<T: Send> Send for Slots<T> {}
// SAFETY: Shared access to Slots only ever produces shared references into the block.
unsafe impl<T: Sync> Sync for Slots<T> {}
