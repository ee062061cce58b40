//! Steque backed by a contiguous, resizing buffer.
//!
//! Provides [`ArraySteque`]: elements live in a `Box<[MaybeUninit<T>]>` in **back-to-top**
//! order, so slot `0` holds the back (the oldest enqueued element) and slot `len - 1` holds
//! the top. That layout makes the stack end cheap and the queue end expensive:
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `push`    | amortized $O(1)$ (writes past the occupied prefix) |
//! | `pop`     | amortized $O(1)$ (reads the last occupied slot) |
//! | `enqueue` | $O(N)$ (shifts the occupied prefix up by one slot) |
//!
//! # Resizing discipline
//! * A full buffer doubles before an insert.
//! * After a `pop`, a buffer whose occupancy has dropped to a quarter is halved, as long as
//!   the result stays at or above the shrink floor.
//!
//! Growing at full and shrinking at a quarter keeps a factor of two between the thresholds,
//! so alternating push/pop at a boundary cannot thrash.
//!
//! `enqueue` moves only the `len` occupied slots, never the whole allocation, so its cost
//! is bounded by the element count rather than the capacity.

use core::fmt;
use core::iter::FusedIterator;
use core::mem::MaybeUninit;
use core::ptr;
use core::slice;

use crate::StequeError;
use crate::steques::AnySteque;

/// A stack-ended queue stored in a single resizing buffer.
///
/// # Invariants
/// * `buf[..len]` is initialized; `buf[len..]` is not.
/// * `buf.len() >= min_capacity >= INITIAL_CAPACITY`.
pub struct ArraySteque<T> {
    buf: Box<[MaybeUninit<T>]>,
    len: usize,
    min_capacity: usize,
}

impl<T> ArraySteque<T> {
    /// Capacity of a freshly created steque, and the lowest capacity a shrink can reach.
    pub const INITIAL_CAPACITY: usize = 10;

    /// Creates a new, empty steque with [`INITIAL_CAPACITY`](Self::INITIAL_CAPACITY) slots.
    pub fn new() -> Self {
        Self::with_capacity(Self::INITIAL_CAPACITY)
    }

    /// Creates an empty steque able to hold `capacity` elements before it grows.
    ///
    /// The buffer never shrinks below `max(capacity, INITIAL_CAPACITY)`.
    pub fn with_capacity(capacity: usize) -> Self {
        let min_capacity = capacity.max(Self::INITIAL_CAPACITY);
        Self {
            buf: Box::<[T]>::new_uninit_slice(min_capacity),
            len: 0,
            min_capacity,
        }
    }

    // --- Inspection ---

    /// Returns the number of elements in the steque.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the steque contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the backing buffer.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns a reference to the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.occupied().last()
    }

    /// Returns a mutable reference to the top element without removing it.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.occupied_mut().last_mut()
    }

    // --- Modification ---

    /// Inserts `item` as the new top.
    ///
    /// Fails with [`StequeError::InvalidArgument`] if `item` is `None`.
    pub fn push(&mut self, item: impl Into<Option<T>>) -> Result<(), StequeError> {
        let item = item.into().ok_or(StequeError::InvalidArgument)?;
        if self.len == self.buf.len() {
            self.resize(self.buf.len() * 2);
        }
        self.buf[self.len].write(item);
        self.len += 1;
        Ok(())
    }

    /// Inserts `item` behind every element currently in the steque.
    ///
    /// Fails with [`StequeError::InvalidArgument`] if `item` is `None`.
    pub fn enqueue(&mut self, item: impl Into<Option<T>>) -> Result<(), StequeError> {
        let item = item.into().ok_or(StequeError::InvalidArgument)?;
        if self.len == self.buf.len() {
            self.resize(self.buf.len() * 2);
        }
        unsafe {
            let base = self.buf.as_mut_ptr();
            ptr::copy(base, base.add(1), self.len);
        }
        self.buf[0].write(item);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the top element.
    ///
    /// Fails with [`StequeError::EmptyContainer`] if the steque is empty.
    pub fn pop(&mut self) -> Result<T, StequeError> {
        if self.len == 0 {
            return Err(StequeError::EmptyContainer);
        }
        self.len -= 1;
        let item = unsafe { self.buf[self.len].assume_init_read() };

        let capacity = self.buf.len();
        if self.len <= capacity / 4 && capacity / 2 >= self.min_capacity {
            self.resize(capacity / 2);
        }
        Ok(item)
    }

    /// Drops every element and resets the buffer to the shrink floor.
    pub fn clear(&mut self) {
        let len = self.len;
        // Leak rather than double-drop if a destructor panics.
        self.len = 0;
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr() as *mut T,
                len,
            ));
        }
        if self.buf.len() != self.min_capacity {
            self.buf = Box::<[T]>::new_uninit_slice(self.min_capacity);
        }
    }

    // --- Iteration ---

    /// Returns an iterator over the elements in top-to-back order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.occupied().iter().rev(),
        }
    }

    // --- Internals ---

    /// The initialized prefix of the buffer, in back-to-top order.
    #[inline(always)]
    fn occupied(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buf.as_ptr() as *const T, self.len) }
    }

    #[inline(always)]
    fn occupied_mut(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr() as *mut T, self.len) }
    }

    /// Moves the occupied prefix into a fresh buffer of `capacity` slots.
    #[inline(never)]
    fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);
        log::trace!(
            "ArraySteque resizing from {} to {} slots ({} occupied)",
            self.buf.len(),
            capacity,
            self.len
        );
        let mut fresh: Box<[MaybeUninit<T>]> = Box::<[T]>::new_uninit_slice(capacity);
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), fresh.as_mut_ptr(), self.len);
        }
        // The old buffer holds `MaybeUninit<T>`, so dropping it releases memory only.
        self.buf = fresh;
    }
}

impl<T> AnySteque<T> for ArraySteque<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        T: 'a;

    fn len(&self) -> usize {
        self.len()
    }
    fn push(&mut self, item: impl Into<Option<T>>) -> Result<(), StequeError> {
        self.push(item)
    }
    fn enqueue(&mut self, item: impl Into<Option<T>>) -> Result<(), StequeError> {
        self.enqueue(item)
    }
    fn pop(&mut self) -> Result<T, StequeError> {
        self.pop()
    }
    fn peek(&self) -> Option<&T> {
        self.peek()
    }
    fn peek_mut(&mut self) -> Option<&mut T> {
        self.peek_mut()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn iter(&self) -> Iter<'_, T> {
        self.iter()
    }
}

// --- Iterators ---

/// Borrowing iterator over an [`ArraySteque`], top to back.
///
/// The iterator holds a shared borrow of the steque, so the steque cannot be mutated while
/// the iterator is alive.
pub struct Iter<'a, T> {
    inner: core::iter::Rev<slice::Iter<'a, T>>,
}

impl<T> Iter<'_, T> {
    /// Iterators are read-only views; this always fails with
    /// [`StequeError::UnsupportedOperation`] and leaves the steque untouched.
    pub fn remove(&mut self) -> Result<(), StequeError> {
        Err(StequeError::UnsupportedOperation)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Owning iterator that pops an [`ArraySteque`] until it is empty.
pub struct IntoIter<T> {
    steque: ArraySteque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.steque.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.steque.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for ArraySteque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { steque: self }
    }
}

impl<'a, T> IntoIterator for &'a ArraySteque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Traits ---

impl<T> Drop for ArraySteque<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(self.occupied_mut() as *mut [T]);
        }
    }
}

impl<T: Clone> Clone for ArraySteque<T> {
    fn clone(&self) -> Self {
        let mut out = Self {
            buf: Box::<[T]>::new_uninit_slice(self.buf.len()),
            len: 0,
            min_capacity: self.min_capacity,
        };
        // `out.len` trails the writes so a panicking `clone` drops only what was written.
        for item in self.occupied() {
            out.buf[out.len].write(item.clone());
            out.len += 1;
        }
        out
    }
}

impl<T: fmt::Debug> fmt::Debug for ArraySteque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for ArraySteque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for ArraySteque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.occupied() == other.occupied()
    }
}

impl<T: Eq> Eq for ArraySteque<T> {}

impl<T> Extend<T> for ArraySteque<T> {
    /// Enqueues every item in order.
    ///
    /// The occupied prefix is shifted once for the whole batch instead of once per item.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let batch: Vec<T> = iter.into_iter().collect();
        let count = batch.len();
        if count == 0 {
            return;
        }

        let mut capacity = self.buf.len();
        while capacity < self.len + count {
            capacity *= 2;
        }
        if capacity != self.buf.len() {
            self.resize(capacity);
        }

        unsafe {
            let base = self.buf.as_mut_ptr();
            ptr::copy(base, base.add(count), self.len);
        }
        // The first item of the batch lands nearest the existing elements.
        for (offset, item) in batch.into_iter().enumerate() {
            self.buf[count - 1 - offset].write(item);
        }
        self.len += count;
    }
}

impl<T> FromIterator<T> for ArraySteque<T> {
    /// Builds a steque whose top-to-back order matches the iterator's order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut steque = Self::new();
        steque.extend(iter);
        steque
    }
}

// --- Tests ---
