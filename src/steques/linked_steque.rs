//! Steque backed by a singly-linked chain of arena slots.
//!
//! # Implementation details
//! - **Arena**: nodes live in a `Vec<Slot>`; links are [`IndexType`] indices, not pointers.
//! - **Ownership**: each node logically owns its successor, and `head` owns the first node.
//!   `tail` is a non-owning index used only to append in $O(1)$.
//! - **Free list**: popped slots are threaded through `free_head` and reused by the next
//!   insert, so a steque that oscillates in size stops allocating.
//!
//! Every operation is $O(1)$ and no element is ever moved after insertion.

use core::fmt;
use core::iter::FusedIterator;

use crate::IndexType;
use crate::StequeError;
use crate::steques::AnySteque;

#[derive(Clone)]
enum Slot<T, I> {
    Occupied { value: T, next: I },
    Vacant { next_free: I },
}

/// A stack-ended queue stored as an index-linked chain.
///
/// `I` bounds how many nodes can be alive at once (see [`IndexType`]).
///
/// # Invariants
/// * `head` and `tail` are both `NONE`, or both point at occupied slots.
/// * Walking `next` links from `head` visits exactly `len` slots and ends at `tail`.
/// * Vacant slots form a chain starting at `free_head`.
#[derive(Clone)]
pub struct LinkedSteque<T, I: IndexType = u32> {
    slots: Vec<Slot<T, I>>,
    head: I,
    tail: I,
    free_head: I,
    len: usize,
}

impl<T, I: IndexType> LinkedSteque<T, I> {
    /// Creates a new, empty steque. Does not allocate.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: I::NONE,
            tail: I::NONE,
            free_head: I::NONE,
            len: 0,
        }
    }

    /// Creates an empty steque with arena room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
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

    /// Returns the number of arena slots, live or free.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns a reference to the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        if self.head.is_none() {
            return None;
        }
        match &self.slots[self.head.as_usize()] {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Vacant { .. } => unreachable!("head must reference an occupied slot"),
        }
    }

    /// Returns a mutable reference to the top element without removing it.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        if self.head.is_none() {
            return None;
        }
        match &mut self.slots[self.head.as_usize()] {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Vacant { .. } => unreachable!("head must reference an occupied slot"),
        }
    }

    // --- Modification ---

    /// Inserts `item` as the new top.
    ///
    /// Fails with [`StequeError::InvalidArgument`] if `item` is `None`.
    ///
    /// # Panics
    /// Panics if the number of live nodes would reach `I::NONE`.
    pub fn push(&mut self, item: impl Into<Option<T>>) -> Result<(), StequeError> {
        let value = item.into().ok_or(StequeError::InvalidArgument)?;
        let idx = self.alloc(value, self.head);
        self.head = idx;
        if self.tail.is_none() {
            self.tail = idx;
        }
        self.len += 1;
        Ok(())
    }

    /// Inserts `item` behind every element currently in the steque.
    ///
    /// Fails with [`StequeError::InvalidArgument`] if `item` is `None`.
    ///
    /// # Panics
    /// Panics if the number of live nodes would reach `I::NONE`.
    pub fn enqueue(&mut self, item: impl Into<Option<T>>) -> Result<(), StequeError> {
        let value = item.into().ok_or(StequeError::InvalidArgument)?;
        self.enqueue_value(value);
        Ok(())
    }

    /// Removes and returns the top element.
    ///
    /// Fails with [`StequeError::EmptyContainer`] if the steque is empty.
    pub fn pop(&mut self) -> Result<T, StequeError> {
        if self.head.is_none() {
            return Err(StequeError::EmptyContainer);
        }
        let (value, next) = self.release(self.head);
        self.head = next;
        self.len -= 1;
        if self.head.is_none() {
            // The last node is gone; `tail` still names its (now vacant) slot.
            self.tail = I::NONE;
        }
        Ok(value)
    }

    /// Drops every element and releases the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = I::NONE;
        self.tail = I::NONE;
        self.free_head = I::NONE;
        self.len = 0;
    }

    // --- Iteration ---

    /// Returns an iterator over the elements in top-to-back order.
    pub fn iter(&self) -> Iter<'_, T, I> {
        Iter {
            slots: &self.slots,
            cursor: self.head,
            remaining: self.len,
        }
    }

    // --- Internals ---

    /// Links an already-present value in behind the current tail.
    fn enqueue_value(&mut self, value: T) {
        let idx = self.alloc(value, I::NONE);
        if self.tail.is_none() {
            self.head = idx;
        } else {
            match &mut self.slots[self.tail.as_usize()] {
                Slot::Occupied { next, .. } => *next = idx,
                Slot::Vacant { .. } => unreachable!("tail must reference an occupied slot"),
            }
        }
        self.tail = idx;
        self.len += 1;
    }

    /// Places a node in a free slot (or a new one) and returns its index.
    fn alloc(&mut self, value: T, next: I) -> I {
        let node = Slot::Occupied { value, next };
        if !self.free_head.is_none() {
            let idx = self.free_head;
            let slot = core::mem::replace(&mut self.slots[idx.as_usize()], node);
            match slot {
                Slot::Vacant { next_free } => self.free_head = next_free,
                Slot::Occupied { .. } => unreachable!("free list must reference a vacant slot"),
            }
            return idx;
        }

        let raw = self.slots.len();
        let Some(idx) = I::from_usize(raw) else {
            panic!("LinkedSteque capacity overflow: {} nodes exceed the index type", raw + 1);
        };
        log::trace!("LinkedSteque growing arena to {} slots", raw + 1);
        self.slots.push(node);
        idx
    }

    /// Vacates `idx`, threads it onto the free list, and returns its value and successor.
    fn release(&mut self, idx: I) -> (T, I) {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match core::mem::replace(&mut self.slots[idx.as_usize()], vacant) {
            Slot::Occupied { value, next } => {
                self.free_head = idx;
                (value, next)
            }
            Slot::Vacant { .. } => unreachable!("released slot must be occupied"),
        }
    }
}

impl<T, I: IndexType> AnySteque<T> for LinkedSteque<T, I> {
    type Iter<'a>
        = Iter<'a, T, I>
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
    fn iter(&self) -> Iter<'_, T, I> {
        self.iter()
    }
}

// --- Iterators ---

/// Borrowing iterator over a [`LinkedSteque`], walking from head to tail.
///
/// Uses $O(1)$ auxiliary space. The shared borrow keeps the steque frozen while the
/// iterator is alive.
pub struct Iter<'a, T, I: IndexType = u32> {
    slots: &'a [Slot<T, I>],
    cursor: I,
    remaining: usize,
}

impl<T, I: IndexType> Iter<'_, T, I> {
    /// Iterators are read-only views; this always fails with
    /// [`StequeError::UnsupportedOperation`] and leaves the steque untouched.
    pub fn remove(&mut self) -> Result<(), StequeError> {
        Err(StequeError::UnsupportedOperation)
    }
}

impl<'a, T, I: IndexType> Iterator for Iter<'a, T, I> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        match &self.slots[self.cursor.as_usize()] {
            Slot::Occupied { value, next } => {
                self.cursor = *next;
                self.remaining -= 1;
                Some(value)
            }
            Slot::Vacant { .. } => unreachable!("chain must only link occupied slots"),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, I: IndexType> ExactSizeIterator for Iter<'_, T, I> {}

impl<T, I: IndexType> FusedIterator for Iter<'_, T, I> {}

impl<T, I: IndexType> Clone for Iter<'_, T, I> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator that pops a [`LinkedSteque`] until it is empty.
pub struct IntoIter<T, I: IndexType = u32> {
    steque: LinkedSteque<T, I>,
}

impl<T, I: IndexType> Iterator for IntoIter<T, I> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.steque.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.steque.len();
        (len, Some(len))
    }
}

impl<T, I: IndexType> ExactSizeIterator for IntoIter<T, I> {}

impl<T, I: IndexType> FusedIterator for IntoIter<T, I> {}

impl<T, I: IndexType> IntoIterator for LinkedSteque<T, I> {
    type Item = T;
    type IntoIter = IntoIter<T, I>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { steque: self }
    }
}

impl<'a, T, I: IndexType> IntoIterator for &'a LinkedSteque<T, I> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, I>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Traits ---

impl<T: fmt::Debug, I: IndexType> fmt::Debug for LinkedSteque<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, I: IndexType> Default for LinkedSteque<T, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq, I: IndexType> PartialEq for LinkedSteque<T, I> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, I: IndexType> Eq for LinkedSteque<T, I> {}

impl<T, I: IndexType> Extend<T> for LinkedSteque<T, I> {
    /// Enqueues every item in order.
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        for item in iter {
            self.enqueue_value(item);
        }
    }
}

impl<T, I: IndexType> FromIterator<T> for LinkedSteque<T, I> {
    /// Builds a steque whose top-to-back order matches the iterator's order.
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut steque = Self::new();
        steque.extend(iter);
        steque
    }
}

// --- Tests ---
