//! Stack-ended queues.
//!
//! A steque has a **top**, where `push` and `pop` work in LIFO order, and a **back**, where
//! `enqueue` appends. An enqueued element surfaces only after everything that was already in
//! the steque has been popped. There is no way to remove from the back.
//!
//! [`AnySteque`] is the shared contract; [`ArraySteque`] and [`LinkedSteque`] are its two
//! backends and differ only in cost:
//!
//! | Operation | `ArraySteque`      | `LinkedSteque` |
//! |-----------|--------------------|----------------|
//! | `push`    | amortized $O(1)$   | $O(1)$         |
//! | `pop`     | amortized $O(1)$   | $O(1)$         |
//! | `enqueue` | $O(N)$             | $O(1)$         |
//! | memory    | contiguous buffer  | one slot + link per element |

pub mod array_steque;
pub mod linked_steque;

pub use array_steque::ArraySteque;
pub use linked_steque::LinkedSteque;

use crate::StequeError;

// ─── AnySteque ────────────────────────────────────────────────────────────────

/// An abstraction over stack-ended queue backends.
///
/// The absence-of-value sentinel is `None`: `push` and `enqueue` take anything that converts
/// into `Option<T>`, so a bare `T` always inserts and `None` is rejected with
/// [`StequeError::InvalidArgument`]. `T` needs no bounds at all.
pub trait AnySteque<T> {
    /// Borrowing iterator in top-to-back order.
    type Iter<'a>: Iterator<Item = &'a T> + ExactSizeIterator
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of elements in the steque.
    fn len(&self) -> usize;
    /// Returns `true` if the steque contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Alias of [`len`](AnySteque::len).
    fn size(&self) -> usize {
        self.len()
    }
    /// Inserts an element as the new top.
    fn push(&mut self, item: impl Into<Option<T>>) -> Result<(), StequeError>;
    /// Inserts an element behind every element already present.
    fn enqueue(&mut self, item: impl Into<Option<T>>) -> Result<(), StequeError>;
    /// Removes and returns the top element, or [`StequeError::EmptyContainer`].
    fn pop(&mut self) -> Result<T, StequeError>;
    /// Returns a shared reference to the top element, or `None` if empty.
    fn peek(&self) -> Option<&T>;
    /// Returns an exclusive reference to the top element, or `None` if empty.
    fn peek_mut(&mut self) -> Option<&mut T>;
    /// Removes all elements.
    fn clear(&mut self);
    /// Iterates from the top (most recently pushed) to the back (most recently enqueued).
    fn iter(&self) -> Self::Iter<'_>;
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::VecDeque;

    /// Reference model: pushed elements (top last) in front of enqueued ones (oldest first).
    #[derive(Default)]
    struct Model {
        pushed: Vec<u32>,
        enqueued: VecDeque<u32>,
    }

    impl Model {
        fn pop(&mut self) -> Option<u32> {
            self.pushed.pop().or_else(|| self.enqueued.pop_front())
        }

        fn len(&self) -> usize {
            self.pushed.len() + self.enqueued.len()
        }

        fn order(&self) -> Vec<u32> {
            self.pushed
                .iter()
                .rev()
                .chain(self.enqueued.iter())
                .copied()
                .collect()
        }
    }

    fn check_against_model<S: AnySteque<u32> + Default>(seed: u64, steps: usize) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut steque = S::default();
        let mut model = Model::default();

        for step in 0..steps {
            let value = step as u32;
            match rng.gen_range(0..3) {
                0 => {
                    steque.push(value).unwrap();
                    model.pushed.push(value);
                }
                1 => {
                    steque.enqueue(value).unwrap();
                    model.enqueued.push_back(value);
                }
                _ => match model.pop() {
                    Some(expected) => assert_eq!(steque.pop(), Ok(expected)),
                    None => assert_eq!(steque.pop(), Err(StequeError::EmptyContainer)),
                },
            }

            assert_eq!(steque.len(), model.len());
            assert_eq!(steque.is_empty(), model.len() == 0);
            assert_eq!(steque.peek(), model.order().first());
            let seen: Vec<u32> = steque.iter().copied().collect();
            assert_eq!(seen, model.order(), "diverged at step {step} (seed {seed})");
        }

        while let Some(expected) = model.pop() {
            assert_eq!(steque.pop(), Ok(expected));
        }
        assert!(steque.is_empty());
    }

    fn check_contract<S: AnySteque<i32> + Default>() {
        let mut s = S::default();
        assert!(s.is_empty());
        assert_eq!(s.size(), 0);
        assert_eq!(s.pop(), Err(StequeError::EmptyContainer));
        assert_eq!(s.size(), 0);

        assert_eq!(s.push(None), Err(StequeError::InvalidArgument));
        assert_eq!(s.enqueue(None), Err(StequeError::InvalidArgument));
        assert_eq!(s.size(), 0);

        s.push(2).unwrap();
        s.push(1).unwrap();
        s.enqueue(3).unwrap();
        s.enqueue(4).unwrap();
        assert_eq!(s.size(), 4);

        let it = s.iter();
        assert_eq!(it.len(), s.size());
        assert_eq!(it.copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);

        if let Some(top) = s.peek_mut() {
            *top = 10;
        }
        assert_eq!(s.pop(), Ok(10));
        assert_eq!(s.size(), 3);

        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.iter().next(), None);
    }

    fn check_many_pushes_then_enqueues<S: AnySteque<usize> + Default>() {
        let mut s = S::default();
        for i in 0..1000 {
            s.push(i).unwrap();
        }
        for i in 1000..2000 {
            s.enqueue(i).unwrap();
        }
        let expected: Vec<usize> = (0..1000).rev().chain(1000..2000).collect();
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), expected);
        for e in expected {
            assert_eq!(s.pop(), Ok(e));
        }
        assert!(s.is_empty());
    }

    #[test]
    fn test_steque_contract_array() {
        check_contract::<ArraySteque<i32>>();
    }

    #[test]
    fn test_steque_bulk_array() {
        check_many_pushes_then_enqueues::<ArraySteque<usize>>();
    }

    #[test]
    fn test_steque_model_array() {
        for seed in 0..16 {
            check_against_model::<ArraySteque<u32>>(seed, 500);
        }
    }

    #[test]
    fn test_steque_contract_linked() {
        check_contract::<LinkedSteque<i32>>();
    }

    #[test]
    fn test_steque_bulk_linked() {
        check_many_pushes_then_enqueues::<LinkedSteque<usize>>();
    }

    #[test]
    fn test_steque_model_linked() {
        for seed in 0..16 {
            check_against_model::<LinkedSteque<u32>>(seed, 500);
            check_against_model::<LinkedSteque<u32, u16>>(seed, 500);
        }
    }

    #[test]
    fn test_steque_backends_agree() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut array: ArraySteque<u32> = ArraySteque::new();
        let mut linked: LinkedSteque<u32> = LinkedSteque::new();
        for value in 0..2000u32 {
            match rng.gen_range(0..4) {
                0 => {
                    array.push(value).unwrap();
                    linked.push(value).unwrap();
                }
                1 => {
                    array.enqueue(value).unwrap();
                    linked.enqueue(value).unwrap();
                }
                _ => assert_eq!(array.pop(), linked.pop()),
            }
        }
        assert!(array.iter().eq(linked.iter()));
        assert_eq!(
            array.into_iter().collect::<Vec<_>>(),
            linked.into_iter().collect::<Vec<_>>()
        );
    }
}
