#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_fifo_order() {
    let mut queue = Queue::new();
    for i in 0..5 {
        queue.enqueue(i);
    }
    assert_eq!(queue.len(), 5);

    for i in 0..5 {
        assert_eq!(queue.dequeue(), Some(i), "Elements should leave in the order they arrived.");
    }
    assert!(queue.is_empty());
}

#[test]
fn test_interleaved() {
    let mut queue = Queue::new();
    queue.enqueue('a');
    queue.enqueue('b');
    assert_eq!(queue.dequeue(), Some('a'));

    queue.enqueue('c');
    assert_eq!(queue.dequeue(), Some('b'));
    assert_eq!(queue.dequeue(), Some('c'));

    // The tail has to be reset once the last node leaves.
    queue.enqueue('d');
    assert_eq!(queue.peek(), Some(&'d'));
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_empty_dequeue() {
    let mut queue = Queue::<u8>::new();
    assert_eq!(queue.dequeue(), None, "Dequeuing from an empty queue should return None.");
    assert_eq!(queue.try_dequeue(), Err(EmptyCollection));
    assert_eq!(queue.peek(), None);
    assert_panics!({
        queue.front();
    });

    queue.enqueue(1);
    assert_eq!(queue.try_dequeue(), Ok(1));
}

#[test]
fn test_peek_mut() {
    let mut queue = Queue::filled(2, 5);
    *queue.peek_mut().unwrap() = 6;
    assert_eq!(queue.front(), &6);
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), [6, 5]);
}

#[test]
fn test_construction() {
    let mut next = 0;
    let queue = Queue::from_fn(3, || {
        next += 1;
        next
    });
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);

    let queue: Queue<_> = "abc".chars().collect();
    assert_eq!(queue.len(), 3);
    assert!(queue.contains(&'b'));
    assert!(!queue.contains(&'z'));

    let zsts = Queue::from_fn(10, || ZeroSizedType);
    assert_eq!(zsts.into_iter().count(), 10);
}

#[test]
fn test_iterators() {
    let mut queue: Queue<_> = (1..=4).collect();
    queue.extend([5, 6]);

    let iter = queue.iter();
    assert_eq!(iter.len(), 6);
    assert_eq!(iter.clone().sum::<i32>(), 21);
    assert_eq!(iter.skip(4).collect::<Vec<_>>(), [&5, &6]);

    let mut owned = queue.into_iter();
    assert_eq!(owned.next(), Some(1));
    assert_eq!(owned.len(), 5);
}

#[test]
fn test_clone_and_equality() {
    let queue: Queue<_> = [1, 2, 3].into_iter().collect();
    let mut copy = queue.clone();
    assert_eq!(queue, copy);

    copy.dequeue();
    copy.enqueue(1);
    assert_ne!(queue, copy, "Order matters for equality.");
    assert_eq!(queue.len(), 3, "Modifying a copy shouldn't affect the original.");

    let state = RandomState::new();
    assert_eq!(state.hash_one(&queue), state.hash_one(queue.clone()));
    assert_eq!(Queue::<i32>::new(), Queue::default());
}

#[test]
fn test_drop_and_clear() {
    let counter = CountedDrop::new(0);
    {
        let mut queue = Queue::filled(4, counter.clone());
        // filled drops its own template value.
        assert_eq!(counter.count(), 1);

        queue.dequeue();
        assert_eq!(counter.count(), 2);

        queue.clear();
        assert_eq!(counter.count(), 5);
        assert!(queue.is_empty());

        queue.enqueue(counter.clone());
    }
    assert_eq!(counter.count(), 6, "Every element should be dropped exactly once.");
}

#[test]
fn test_long_queue_drop() {
    let queue = Queue::from_fn(200_000, || 0_u8);
    assert_eq!(queue.len(), 200_000);
    drop(queue);
}

#[test]
fn test_formatting() {
    let queue: Queue<_> = [1, 2].into_iter().collect();
    assert_eq!(format!("{queue:?}"), "Queue { contents: [1, 2], len: 2 }");
}
