#![cfg(test)]

use std::cell::RefCell;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroSizedType;

/// A value that increments a shared counter when dropped. Clones share the same counter.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }

    /// Reads the counter without resetting it.
    pub fn count(&self) -> usize {
        *self.0.borrow()
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CountedDrop {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

/// A value whose [`Clone`] implementation panics once the shared budget of clones is used up.
#[derive(Debug)]
pub struct FallibleClone {
    pub budget: Rc<RefCell<usize>>,
    pub drops: CountedDrop,
}

impl Clone for FallibleClone {
    fn clone(&self) -> Self {
        let mut budget = self.budget.borrow_mut();
        if *budget == 0 {
            panic!("clone budget exhausted");
        }
        *budget -= 1;

        FallibleClone {
            budget: self.budget.clone(),
            drops: self.drops.clone(),
        }
    }
}
