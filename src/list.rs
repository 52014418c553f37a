use core::fmt;
use core::mem::{self, MaybeUninit};
use core::ptr;
use core::slice;

use alloc::boxed::Box;
use alloc::string::String;

use crate::error::DynListError;

const DEFAULT_CAPACITY: usize = 10;
const DUMP_ENTRIES_PER_LINE: usize = 8;

/// A growable array-backed list with positional insert and remove.
///
/// Elements live in the leading `len` slots of a single contiguous buffer;
/// the remaining slots are uninitialized spare capacity. Positional insertion
/// and removal shift the tail of the live prefix by one slot, so element `i`
/// is always list index `i`.
pub struct DynList<T> {
    buffer: Box<[MaybeUninit<T>]>,
    len: usize,
}

impl<T> DynList<T> {
    /// Creates an empty list with the default capacity (10 slots).
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty list with room for exactly `capacity` elements
    /// before the first growth.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Box::new_uninit_slice(capacity),
            len: 0,
        }
    }

    /// Number of elements currently in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of slots in the backing buffer. Grows by doubling and
    /// never shrinks, including after `clear` and removals.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// The live prefix of the buffer.
    fn live(&self) -> &[T] {
        // SAFETY: slots [0, len) always hold initialized elements.
        unsafe { slice::from_raw_parts(self.buffer.as_ptr().cast::<T>(), self.len) }
    }

    fn check_bounds(&self, index: usize) -> Result<(), DynListError> {
        if index >= self.len {
            return Err(DynListError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }
        Ok(())
    }

    /// Guarantees capacity for at least one more element.
    ///
    /// Doubles the buffer when full; an empty buffer jumps straight to the
    /// default capacity. No observable effect when capacity already suffices.
    fn grow_if_needed(&mut self) {
        if self.len < self.capacity() {
            return;
        }
        let new_capacity = if self.capacity() == 0 {
            DEFAULT_CAPACITY
        } else {
            self.capacity() * 2
        };
        let mut new_buffer = Box::new_uninit_slice(new_capacity);
        // SAFETY: distinct allocations; the first `len` slots of the old
        // buffer are initialized and ownership moves bitwise into the new
        // buffer. The old box frees its storage without dropping contents.
        unsafe {
            ptr::copy_nonoverlapping(self.buffer.as_ptr(), new_buffer.as_mut_ptr(), self.len);
        }
        self.buffer = new_buffer;
    }

    /// Moves `[index, len)` one slot toward higher indices, freeing slot
    /// `index`.
    ///
    /// # Safety
    ///
    /// Caller guarantees `index <= len` and a spare slot past the live
    /// prefix (post-growth).
    unsafe fn shift_right(&mut self, index: usize) {
        let base = self.buffer.as_mut_ptr();
        ptr::copy(base.add(index), base.add(index + 1), self.len - index);
    }

    /// Moves `[index + 1, len)` one slot toward lower indices, overwriting
    /// slot `index`.
    ///
    /// # Safety
    ///
    /// Caller guarantees `index < len` and that slot `index` no longer owns
    /// an element.
    unsafe fn shift_left(&mut self, index: usize) {
        let base = self.buffer.as_mut_ptr();
        ptr::copy(base.add(index + 1), base.add(index), self.len - 1 - index);
    }

    /// Insertion core shared by `insert`, `push_front`, `push_back`, and
    /// `insert_after`. Caller has validated `index <= len`.
    fn insert_at(&mut self, index: usize, item: T) {
        self.grow_if_needed();
        if index < self.len {
            // SAFETY: grow_if_needed left a spare slot past the live prefix.
            unsafe { self.shift_right(index) };
        }
        self.buffer[index].write(item);
        self.len += 1;
    }

    /// Removal core shared by `remove`, `pop_front`, `pop_back`, and
    /// `remove_item`. Caller has validated `index < len`.
    fn remove_at(&mut self, index: usize) -> T {
        // SAFETY: slot `index` is within the live prefix. Ownership of the
        // element transfers to `item` here; the bits left behind are treated
        // as uninitialized from now on.
        let item = unsafe { self.buffer[index].assume_init_read() };
        if index < self.len - 1 {
            // SAFETY: slot `index` has been moved out of.
            unsafe { self.shift_left(index) };
        }
        self.len -= 1;
        item
    }

    /// Inserts `item` at `index`, shifting the elements at `[index, len)`
    /// one position up. `index == len` appends without shifting.
    ///
    /// # Errors
    ///
    /// Returns `DynListError::IndexOutOfBounds` if `index > len`. The list
    /// is unchanged on failure.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), DynListError> {
        if index > self.len {
            return Err(DynListError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }
        self.insert_at(index, item);
        Ok(())
    }

    /// Inserts `item` at the front of the list.
    pub fn push_front(&mut self, item: T) {
        self.insert_at(0, item);
    }

    /// Appends `item` to the end of the list.
    pub fn push_back(&mut self, item: T) {
        self.insert_at(self.len, item);
    }

    /// Removes and returns the element at `index`, shifting the elements at
    /// `[index + 1, len)` one position down.
    ///
    /// # Errors
    ///
    /// Returns `DynListError::IndexOutOfBounds` if `index >= len`. The list
    /// is unchanged on failure.
    pub fn remove(&mut self, index: usize) -> Result<T, DynListError> {
        self.check_bounds(index)?;
        Ok(self.remove_at(index))
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns `DynListError::EmptyList` if the list is empty.
    pub fn pop_front(&mut self) -> Result<T, DynListError> {
        if self.is_empty() {
            return Err(DynListError::EmptyList);
        }
        Ok(self.remove_at(0))
    }

    /// Removes and returns the last element. Never shifts.
    ///
    /// # Errors
    ///
    /// Returns `DynListError::EmptyList` if the list is empty.
    pub fn pop_back(&mut self) -> Result<T, DynListError> {
        if self.is_empty() {
            return Err(DynListError::EmptyList);
        }
        Ok(self.remove_at(self.len - 1))
    }

    /// Drops all elements. Capacity is retained.
    pub fn clear(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.buffer.as_mut_ptr().cast::<T>(), self.len);
        // len goes to zero first so a panicking Drop cannot double-drop.
        self.len = 0;
        // SAFETY: `live` covered exactly the initialized prefix.
        unsafe { ptr::drop_in_place(live) };
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynListError::IndexOutOfBounds` if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, DynListError> {
        self.check_bounds(index)?;
        Ok(&self.live()[index])
    }

    /// Replaces the element at `index` and returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns `DynListError::IndexOutOfBounds` if `index >= len`. The list
    /// is unchanged on failure.
    pub fn set(&mut self, index: usize, item: T) -> Result<T, DynListError> {
        self.check_bounds(index)?;
        // SAFETY: slot `index` is within the live prefix.
        let slot = unsafe { self.buffer[index].assume_init_mut() };
        Ok(mem::replace(slot, item))
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns `DynListError::EmptyList` if the list is empty.
    pub fn front(&self) -> Result<&T, DynListError> {
        if self.is_empty() {
            return Err(DynListError::EmptyList);
        }
        Ok(&self.live()[0])
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns `DynListError::EmptyList` if the list is empty.
    pub fn back(&self) -> Result<&T, DynListError> {
        if self.is_empty() {
            return Err(DynListError::EmptyList);
        }
        Ok(&self.live()[self.len - 1])
    }

    /// Renders a multi-line snapshot of the whole buffer: size, capacity,
    /// and every slot in order, eight entries per line. Live slots show the
    /// element, spare slots show `_`.
    ///
    /// Diagnostic output only; the exact layout is not a stable API.
    #[must_use]
    pub fn dump(&self) -> String
    where
        T: fmt::Debug,
    {
        use core::fmt::Write;

        let mut out = String::new();
        let _ = write!(
            out,
            "DynList[size={}, capacity={}]\n  slots: [",
            self.len,
            self.capacity()
        );
        for index in 0..self.capacity() {
            if index % DUMP_ENTRIES_PER_LINE == 0 {
                out.push_str("\n    ");
            } else {
                out.push_str(" | ");
            }
            if index < self.len {
                let _ = write!(out, "{:?}", self.live()[index]);
            } else {
                out.push('_');
            }
        }
        out.push_str("\n  ]");
        out
    }
}

impl<T: PartialEq> DynList<T> {
    /// Returns the position of the first element equal to `item`, or `None`
    /// if no element matches. O(len).
    #[must_use]
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.live().iter().position(|candidate| candidate == item)
    }

    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Inserts `item` directly after the first occurrence of `existing`.
    ///
    /// Returns `true` on insertion, `false` (list unchanged) when `existing`
    /// is not present. Absence is a normal outcome, not an error.
    pub fn insert_after(&mut self, existing: &T, item: T) -> bool {
        match self.index_of(existing) {
            Some(found) => {
                self.insert_at(found + 1, item);
                true
            }
            None => false,
        }
    }

    /// Removes the first element equal to `item`.
    ///
    /// Returns `true` on removal, `false` (list unchanged) when no element
    /// matches.
    pub fn remove_item(&mut self, item: &T) -> bool {
        match self.index_of(item) {
            Some(found) => {
                self.remove_at(found);
                true
            }
            None => false,
        }
    }
}

impl<T> Drop for DynList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for DynList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.live()).finish()
    }
}
