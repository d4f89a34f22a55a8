#![cfg(test)]

use proptest::collection::vec;
use proptest::prelude::*;

use super::*;

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    Reserve(usize),
    ShrinkToFit,
    Resize(usize, i32),
    Insert(usize, i32),
    Erase(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::Push),
        Just(Op::Pop),
        (0_usize..40).prop_map(Op::Reserve),
        Just(Op::ShrinkToFit),
        (0_usize..40, any::<i32>()).prop_map(|(len, fill)| Op::Resize(len, fill)),
        (0_usize..40, any::<i32>()).prop_map(|(index, value)| Op::Insert(index, value)),
        (0_usize..40).prop_map(Op::Erase),
    ]
}

fn array_from(values: &[i32], extra_cap: usize) -> DynamicArray<i32> {
    let mut arr = DynamicArray::with_cap(values.len() + extra_cap);
    arr.extend(values.iter().copied());
    arr
}

proptest! {
    #[test]
    fn len_never_exceeds_cap(ops in vec(op(), 0..64)) {
        let mut arr = DynamicArray::new();
        // A plain slice-backed model of the expected contents.
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Push(value) => {
                    arr.push(value);
                    model.push(value);
                },
                Op::Pop => {
                    arr.pop_back();
                    model.pop();
                },
                Op::Reserve(cap) => {
                    arr.reserve(cap);
                    model.truncate(cap);
                    prop_assert_eq!(arr.cap(), cap);
                },
                Op::ShrinkToFit => {
                    arr.shrink_to_fit();
                    prop_assert_eq!(arr.cap(), arr.len());
                },
                Op::Resize(len, fill) => {
                    arr.resize(len, fill);
                    model.resize(len, fill);
                },
                Op::Insert(index, value) => {
                    let result = arr.try_insert(arr.position(index), value);
                    prop_assert_eq!(result.is_ok(), index <= model.len());
                    if index <= model.len() {
                        model.insert(index, value);
                    }
                },
                Op::Erase(index) => {
                    let result = arr.try_erase(arr.position(index));
                    prop_assert_eq!(result.is_ok(), index < model.len());
                    if index < model.len() {
                        model.remove(index);
                    }
                },
            }

            prop_assert!(arr.len() <= arr.cap());
            prop_assert_eq!(&*arr, &model[..]);
        }
    }

    #[test]
    fn shrink_to_fit_preserves_values(values in vec(any::<i32>(), 0..50), extra in 0_usize..20) {
        let mut arr = array_from(&values, extra);

        arr.shrink_to_fit();
        prop_assert_eq!(&*arr, &values[..]);
        prop_assert_eq!(arr.cap(), values.len());

        arr.shrink_to_fit();
        prop_assert_eq!(&*arr, &values[..]);
        prop_assert_eq!(arr.cap(), values.len());
    }

    #[test]
    fn erase_undoes_insert(
        values in vec(any::<i32>(), 0..50),
        extra in 1_usize..8,
        index in any::<prop::sample::Index>(),
        value in any::<i32>(),
    ) {
        let mut arr = array_from(&values, extra);
        let index = index.index(values.len() + 1);

        let pos = arr.insert(arr.position(index), value);
        prop_assert_eq!(arr.get_at(pos), &value);
        arr.erase(pos);

        prop_assert_eq!(&*arr, &values[..]);
    }

    #[test]
    fn copies_are_independent(values in vec(any::<i32>(), 1..50), value in any::<i32>()) {
        let original = array_from(&values, 3);
        let mut copy = original.clone();

        copy.push(value);
        copy[0] = copy[0].wrapping_add(1);
        copy.reserve(1);

        prop_assert_eq!(&*original, &values[..]);
        prop_assert_eq!(original.cap(), values.len() + 3);
    }
}

#[test]
fn growth_is_logarithmic() {
    let mut arr = DynamicArray::new();
    let mut reallocations = 0_usize;
    let mut relocated = 0_usize;

    for i in 0..10_000_usize {
        if arr.len() == arr.cap() {
            reallocations += 1;
            relocated += arr.len();
        }
        arr.push(i);

        // log1.5(10_000) is roughly 23, with a few extra steps while the +1 bias dominates.
        assert!(reallocations <= 2 * (usize::BITS - i.leading_zeros()) as usize + 4);
    }

    assert!(
        reallocations <= 30,
        "10,000 pushes should take a logarithmic number of reallocations, took {reallocations}."
    );
    assert!(
        relocated <= 3 * arr.len(),
        "The total number of relocated elements should be linear, was {relocated}."
    );
}
