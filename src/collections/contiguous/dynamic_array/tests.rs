#![cfg(test)]

use std::borrow::Borrow;
use std::cell::RefCell;
use std::hash::{BuildHasher, RandomState};
use std::rc::Rc;

use super::*;
use crate::util::alloc::{CountedDrop, FallibleClone, ZeroSizedType};
use crate::util::error::{IndexOutOfBounds, PositionError, StalePosition};
use crate::util::panic::assert_panics;

#[test]
fn test_construction() {
    let arr: DynamicArray<u8> = DynamicArray::new();
    assert_eq!((arr.len(), arr.cap()), (0, 0), "A new DynamicArray should be empty.");

    let arr = DynamicArray::filled(4, 7_u8);
    assert_eq!(&*arr, &[7, 7, 7, 7]);
    assert_eq!(
        (arr.len(), arr.cap()),
        (4, 4),
        "Sized construction should allocate exactly the requested number of slots."
    );

    let arr = DynamicArray::<String>::repeat_default(2);
    assert_eq!(&*arr, &[String::new(), String::new()]);

    let arr = DynamicArray::<u8>::with_cap(9);
    assert_eq!((arr.len(), arr.cap()), (0, 9));
}

#[test]
fn test_zst_support() {
    let mut arr = DynamicArray::<ZeroSizedType>::new();
    for _ in 0..100 {
        arr.push(ZeroSizedType);
    }
    assert_eq!(arr.len(), 100);
    assert_eq!(arr[99], ZeroSizedType, "Indexing should work for ZSTs.");

    arr.insert(arr.position(50), ZeroSizedType);
    arr.erase(arr.begin());
    arr.shrink_to_fit();
    assert_eq!((arr.len(), arr.cap()), (100, 100));
    assert_eq!(arr.into_iter().count(), 100, "Should iterate over the right number of ZSTs.");
}

#[test]
fn test_growth() {
    let mut arr = DynamicArray::new();
    let mut caps = DynamicArray::new();

    for i in 0..10 {
        if arr.len() == arr.cap() {
            caps.push(arr.cap());
        }
        arr.push(i);
    }

    assert_eq!(
        *caps,
        [0, 1, 2, 4, 7],
        "Growth should follow cap + cap / 2 + 1."
    );
    assert_eq!(arr.cap(), 11);
    assert_eq!(&*arr, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_reserve() {
    let mut arr = DynamicArray::from([1, 2, 3, 4, 5]);

    arr.reserve(8);
    assert_eq!(arr.cap(), 8, "Reserve should allocate exactly the requested capacity.");
    assert_eq!(&*arr, &[1, 2, 3, 4, 5], "Reserve should preserve the order of all values.");

    arr.reserve(3);
    assert_eq!(
        (&*arr, arr.cap()),
        (&[1, 2, 3][..], 3),
        "Reserving less than the length should discard the excess elements."
    );

    let counter = CountedDrop::new(0);
    let mut arr = DynamicArray::filled(6, counter.clone());
    arr.reserve(2);
    assert_eq!(counter.count(), 5, "The clone source and 4 discarded elements should be dropped.");

    arr.reserve_extra(3);
    assert_eq!(arr.cap(), 5, "reserve_extra should make room for at least len + extra.");
    arr.reserve_extra(1);
    assert_eq!(arr.cap(), 5, "reserve_extra should never shrink.");
}

#[test]
fn test_repeated_extend_grows_geometrically() {
    let mut arr = DynamicArray::new();
    let mut reallocations = 0;

    for i in 0..1000 {
        let cap = arr.cap();
        arr.extend([i]);
        if arr.cap() != cap {
            reallocations += 1;
        }
    }

    assert_eq!(arr.len(), 1000);
    assert!(
        reallocations <= 20,
        "Single element extends should grow like pushes, reallocated {reallocations} times."
    );
    assert!(arr.cap() > arr.len(), "Growth should leave spare capacity.");
}

#[test]
fn test_try_reserve_failure() {
    let mut arr = DynamicArray::from([1_u64, 2, 3]);
    let pos = arr.begin();

    assert!(
        arr.try_reserve(usize::MAX).is_err_and(|err| err.is_capacity_overflow()),
        "An impossible layout should be reported."
    );
    assert_eq!(&*arr, &[1, 2, 3], "A failed reserve should leave the array untouched.");
    assert_eq!(arr.cap(), 3);
    assert!(arr.try_get_at(pos).is_ok(), "A failed reserve shouldn't invalidate positions.");

    assert_panics!({
        let mut arr = DynamicArray::<u64>::new();
        arr.reserve(isize::MAX as usize);
    });
}

#[test]
fn test_shrink_to_fit() {
    let mut arr = DynamicArray::with_cap(10);
    arr.extend([1, 2, 3]);

    arr.shrink_to_fit();
    assert_eq!((arr.len(), arr.cap()), (3, 3));
    arr.shrink_to_fit();
    assert_eq!(
        (&*arr, arr.cap()),
        (&[1, 2, 3][..], 3),
        "Shrinking twice should be the same as shrinking once."
    );
}

#[test]
fn test_pop() {
    let mut arr = DynamicArray::from([1, 2]);
    assert_eq!(arr.pop(), Some(2));
    arr.pop_back();
    assert!(arr.is_empty());

    arr.pop_back();
    assert_eq!(
        (arr.len(), arr.pop()),
        (0, None),
        "Popping an empty DynamicArray should do nothing."
    );
}

#[test]
fn test_resize() {
    let mut arr = DynamicArray::from([1, 2]);
    arr.resize(4, 9);
    assert_eq!(&*arr, &[1, 2, 9, 9]);
    assert_eq!(arr.cap(), 4, "Growing past capacity should reserve exactly new_len.");

    arr.reserve(10);
    arr.resize(5, 0);
    assert_eq!(arr.cap(), 10, "Growing within capacity shouldn't reallocate.");

    let counter = CountedDrop::new(0);
    let mut arr = DynamicArray::filled(5, counter.clone());
    arr.resize_with(2, || unreachable!());
    assert_eq!(counter.count(), 4, "Shrinking should drop the excess elements.");
    assert_eq!((arr.len(), arr.cap()), (2, 5), "Shrinking should keep the capacity.");
}

#[test]
fn test_scenario() {
    let mut arr = DynamicArray::new();
    arr.push(10);
    arr.push(20);
    arr.push(30);

    arr.resize(5, 0);
    assert_eq!(&*arr, &[10, 20, 30, 0, 0]);
    assert_eq!(arr.len(), 5);

    let pos = arr.insert(arr.position(1), 99);
    assert_eq!(&*arr, &[10, 99, 20, 30, 0, 0]);
    assert_eq!(arr.len(), 6);
    assert_eq!(arr.get_at(pos), &99, "Insert should return a position to the new element.");

    arr.erase(arr.begin());
    assert_eq!(&*arr, &[99, 20, 30, 0, 0]);
    assert_eq!(arr.len(), 5);
}

#[test]
fn test_insert_and_erase() {
    let mut arr = DynamicArray::from([1, 2, 3]);

    let pos = arr.insert(arr.end(), 4);
    assert_eq!(&*arr, &[1, 2, 3, 4], "Inserting at the end should behave as a push.");
    assert_eq!(pos.index(), 3);

    assert_eq!(
        arr.try_insert(arr.position(5), 0),
        Err(PositionError::IndexOutOfBounds(IndexOutOfBounds { index: 5, len: 4 })),
    );
    assert_eq!(
        arr.try_erase(arr.end()),
        Err(PositionError::IndexOutOfBounds(IndexOutOfBounds { index: 4, len: 4 })),
        "Erasing the end position should be out of range."
    );
    assert_eq!(&*arr, &[1, 2, 3, 4], "Failed calls should leave the array unmodified.");

    let next = arr.erase(arr.position(1));
    assert_eq!(arr.get_at(next), &3, "Erase should return the element that moved into place.");
    let next = arr.erase(arr.position(2));
    assert_eq!(next, arr.end(), "Erasing the last element should return the end position.");
    assert_eq!(&*arr, &[1, 3]);

    assert_panics!({
        let mut arr = DynamicArray::from([1]);
        arr.erase(arr.end());
    });

    let counter = CountedDrop::new(0);
    let mut arr = DynamicArray::filled(3, counter.clone());
    arr.insert(arr.begin(), counter.clone());
    arr.erase(arr.position(2));
    assert_eq!(counter.count(), 2, "Only the clone source and the erased value should drop.");
    drop(arr);
    assert_eq!(counter.count(), 5, "All remaining elements should drop exactly once.");
}

#[test]
fn test_remove() {
    let mut arr = DynamicArray::from(['a', 'b', 'c']);
    assert_eq!(arr.remove(0), 'a');
    assert_eq!(arr.try_remove(2), Err(IndexOutOfBounds { index: 2, len: 2 }));
    assert_eq!(&*arr, &['b', 'c']);
}

#[test]
fn test_positions() {
    let mut arr = DynamicArray::with_cap(4);
    arr.extend([1, 2, 3]);

    let begin = arr.begin();
    let mut pos = begin + 2;
    assert_eq!(arr.get_at(pos), &3);
    pos -= 1;
    assert_eq!(arr.get_at(pos), &2);
    assert_eq!(pos.prev(), begin);
    assert_eq!((pos + 2).offset_from(begin), Some(3));
    assert!(begin < arr.end());

    *arr.get_at_mut(pos) = 20;
    assert_eq!(&*arr, &[1, 20, 3]);

    arr.push(4);
    assert!(
        arr.try_get_at(pos).is_ok(),
        "Pushing without reallocating shouldn't invalidate positions."
    );
    assert_eq!(
        arr.try_get_at(arr.end()),
        Err(PositionError::IndexOutOfBounds(IndexOutOfBounds { index: 4, len: 4 })),
    );
    assert!(
        arr.try_get_at(begin.prev()).is_err_and(|err| err.is_index_out_of_bounds()),
        "Stepping before the start should be out of range, not a panic."
    );

    arr.push(5);
    assert_eq!(
        arr.try_get_at(pos),
        Err(PositionError::StalePosition(StalePosition)),
        "Reallocation should invalidate positions."
    );

    let pos = arr.begin();
    arr.erase(arr.end() - 1);
    assert!(arr.try_get_at(pos).is_err_and(|err| err.is_stale_position()));
    assert_eq!(pos.offset_from(arr.begin()), None);
    assert_eq!(pos.partial_cmp(&arr.begin()), None, "Positions from different epochs don't order.");

    let other = DynamicArray::from([1, 20, 3, 4]);
    assert!(
        arr.try_get_at(other.begin()).is_err_and(|err| err.is_stale_position()),
        "Positions from another array should be rejected."
    );
    assert_panics!({
        arr.get_at(other.begin());
    });
}

#[test]
fn test_layout_changes_invalidate_every_position() {
    let mut arr = DynamicArray::with_cap(8);
    arr.extend([1, 2, 3]);

    let front = arr.begin();
    arr.insert(arr.end(), 4);
    assert!(
        arr.try_get_at(front).is_err_and(|err| err.is_stale_position()),
        "An insert invalidates positions before the inserted index too."
    );

    let front = arr.begin();
    arr.pop();
    assert!(arr.try_get_at(front).is_err_and(|err| err.is_stale_position()));

    let front = arr.begin();
    arr.remove(2);
    assert!(arr.try_get_at(front).is_err_and(|err| err.is_stale_position()));
    assert_eq!(arr.get_at(arr.begin()), &1, "A fresh position sees the same element.");
}

#[test]
fn test_checked_access() {
    let mut arr = DynamicArray::from([5, 6]);
    assert_eq!(arr.at(0), Ok(&5));
    assert_eq!(arr.at(2), Err(IndexOutOfBounds { index: 2, len: 2 }));
    *arr.at_mut(1).unwrap() = 7;
    assert_eq!(arr[1], 7);

    assert_panics!({
        let arr = DynamicArray::from([5, 6]);
        let _value = arr[2];
    });
}

#[test]
fn test_clone() {
    let mut arr = DynamicArray::with_cap(8);
    arr.extend([String::from("a"), String::from("b")]);

    let mut copy = arr.clone();
    assert_eq!(copy, arr);
    assert_eq!(copy.cap(), 8, "A copy should mirror the source capacity.");

    copy.push(String::from("c"));
    copy[0].push('!');
    assert_eq!(&*arr, &["a", "b"], "Mutating a copy shouldn't affect the original.");
    assert_eq!((arr.len(), arr.cap()), (2, 8));

    let mut target = DynamicArray::from([String::from("x")]);
    let pos = target.begin();
    target.clone_from(&arr);
    assert_eq!(target, arr);
    assert_eq!(target.cap(), 8);
    assert!(target.try_get_at(pos).is_err(), "Assignment should invalidate positions.");
}

#[test]
fn test_clone_panic_safety() {
    let drops = CountedDrop::new(0);
    let budget = Rc::new(RefCell::new(usize::MAX));
    let source = DynamicArray::from_fn(4, || FallibleClone {
        budget: budget.clone(),
        drops: drops.clone(),
    });
    assert_eq!(drops.count(), 0);

    *budget.borrow_mut() = 2;
    assert_panics!({
        let _ = source.clone();
    });
    assert_eq!(drops.count(), 2, "The two completed clones should be dropped.");

    *budget.borrow_mut() = 1;
    let mut target = DynamicArray::from_fn(1, || FallibleClone {
        budget: budget.clone(),
        drops: drops.clone(),
    });
    assert_panics!({
        target.clone_from(&source);
    });
    assert_eq!(target.len(), 1, "A failed assignment should leave the target untouched.");
    assert_eq!(drops.count(), 3);

    drop(target);
    drop(source);
    assert_eq!(drops.count(), 8, "Every live element should be dropped exactly once.");
}

#[test]
fn test_move() {
    let arr = DynamicArray::from([1, 2, 3]);
    let ptr = arr.as_ptr();

    let moved = arr;
    assert_eq!(moved.as_ptr(), ptr, "Moving should transfer the storage without copying.");

    let mut target = DynamicArray::from([9]);
    assert_eq!(&*target, &[9]);
    target = moved;
    assert_eq!(&*target, &[1, 2, 3]);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut arr = DynamicArray::with_cap(20);
    for _ in 0..10 {
        arr.push(counter.clone());
    }

    drop(arr);
    assert_eq!(counter.count(), 10, "10 elements should have been dropped.");

    let counter = CountedDrop::new(0);
    let mut arr = DynamicArray::filled(4, counter.clone());
    arr.clear();
    assert_eq!(counter.count(), 5);
    assert_eq!((arr.len(), arr.cap()), (0, 4), "Clear should keep the capacity.");
}

#[test]
fn test_equality_and_hash() {
    let arr: DynamicArray<usize> = (0..5).collect();

    assert_eq!(
        arr,
        DynamicArray::from([0, 1, 2, 3, 4]),
        "Different construction methods should produce equal results."
    );
    assert_ne!(DynamicArray::from([0, 1, 2, 5, 4]), arr);

    assert_eq!(
        Borrow::<[usize]>::borrow(&arr),
        &[0, 1, 2, 3, 4],
        "Borrow equality should be upheld."
    );

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one([0_usize, 1, 2, 3, 4]),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_iterators() {
    let mut arr: DynamicArray<usize> = (0..5).collect();
    for i in arr.iter_mut() {
        *i *= 2;
    }
    assert_eq!(*arr, [0, 2, 4, 6, 8]);

    for i in &mut arr {
        *i += 1;
    }
    assert_eq!((&arr).into_iter().sum::<usize>(), 25);

    let mut iter = arr.clone().into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(9));
    assert_eq!(iter.next_back(), Some(7));
    assert_eq!(iter.next(), Some(3));
    assert_eq!(iter.next_back(), Some(5));
    assert_eq!(iter.next(), None);

    let counter = CountedDrop::new(0);
    let arr = DynamicArray::from_fn(10, || counter.clone());
    let mut iter = arr.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.count(), 10, "Dropping an owned iterator should drop all elements.");
}

#[test]
fn test_formatting() {
    let arr = DynamicArray::from([1, 2]);
    assert_eq!(format!("{arr}"), "[1, 2]");
    assert_eq!(
        format!("{arr:?}"),
        "DynamicArray { contents: [1, 2], len: 2, cap: 2 }"
    );
}
