//! Capability contracts satisfied by the list.
//!
//! `Collection` is the minimal set any container offers; `List` layers the
//! positional operations on top. Both are pure contracts with no logic of
//! their own, so generic code can take `&mut impl List<T>` without caring
//! about the backing storage.

use crate::error::DynListError;
use crate::list::DynList;

/// Minimal capability set shared by all collections.
pub trait Collection<T: PartialEq> {
    /// Removes every element.
    fn clear(&mut self);

    /// Whether any element equals `item`.
    fn contains(&self, item: &T) -> bool;

    fn is_empty(&self) -> bool;

    /// Number of elements.
    fn len(&self) -> usize;
}

/// Positional list capabilities, built on [`Collection`].
pub trait List<T: PartialEq>: Collection<T> {
    /// Inserts `item` at `index`, shifting later elements up.
    ///
    /// # Errors
    ///
    /// `DynListError::IndexOutOfBounds` if `index > len`.
    fn insert(&mut self, index: usize, item: T) -> Result<(), DynListError>;

    fn push_front(&mut self, item: T);

    fn push_back(&mut self, item: T);

    /// Inserts `item` after the first occurrence of `existing`; `false` if
    /// `existing` is absent.
    fn insert_after(&mut self, existing: &T, item: T) -> bool;

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// `DynListError::IndexOutOfBounds` if `index >= len`.
    fn remove(&mut self, index: usize) -> Result<T, DynListError>;

    /// Removes the first occurrence of `item`; `false` if absent.
    fn remove_item(&mut self, item: &T) -> bool;

    /// # Errors
    ///
    /// `DynListError::EmptyList` if the list is empty.
    fn pop_front(&mut self) -> Result<T, DynListError>;

    /// # Errors
    ///
    /// `DynListError::EmptyList` if the list is empty.
    fn pop_back(&mut self) -> Result<T, DynListError>;

    /// # Errors
    ///
    /// `DynListError::EmptyList` if the list is empty.
    fn front(&self) -> Result<&T, DynListError>;

    /// # Errors
    ///
    /// `DynListError::EmptyList` if the list is empty.
    fn back(&self) -> Result<&T, DynListError>;

    /// # Errors
    ///
    /// `DynListError::IndexOutOfBounds` if `index >= len`.
    fn get(&self, index: usize) -> Result<&T, DynListError>;

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// `DynListError::IndexOutOfBounds` if `index >= len`.
    fn set(&mut self, index: usize, item: T) -> Result<T, DynListError>;

    /// Position of the first occurrence of `item`, if any.
    fn index_of(&self, item: &T) -> Option<usize>;
}

impl<T: PartialEq> Collection<T> for DynList<T> {
    fn clear(&mut self) {
        DynList::clear(self);
    }

    fn contains(&self, item: &T) -> bool {
        DynList::contains(self, item)
    }

    fn is_empty(&self) -> bool {
        DynList::is_empty(self)
    }

    fn len(&self) -> usize {
        DynList::len(self)
    }
}

impl<T: PartialEq> List<T> for DynList<T> {
    fn insert(&mut self, index: usize, item: T) -> Result<(), DynListError> {
        DynList::insert(self, index, item)
    }

    fn push_front(&mut self, item: T) {
        DynList::push_front(self, item);
    }

    fn push_back(&mut self, item: T) {
        DynList::push_back(self, item);
    }

    fn insert_after(&mut self, existing: &T, item: T) -> bool {
        DynList::insert_after(self, existing, item)
    }

    fn remove(&mut self, index: usize) -> Result<T, DynListError> {
        DynList::remove(self, index)
    }

    fn remove_item(&mut self, item: &T) -> bool {
        DynList::remove_item(self, item)
    }

    fn pop_front(&mut self) -> Result<T, DynListError> {
        DynList::pop_front(self)
    }

    fn pop_back(&mut self) -> Result<T, DynListError> {
        DynList::pop_back(self)
    }

    fn front(&self) -> Result<&T, DynListError> {
        DynList::front(self)
    }

    fn back(&self) -> Result<&T, DynListError> {
        DynList::back(self)
    }

    fn get(&self, index: usize) -> Result<&T, DynListError> {
        DynList::get(self, index)
    }

    fn set(&mut self, index: usize, item: T) -> Result<T, DynListError> {
        DynList::set(self, index, item)
    }

    fn index_of(&self, item: &T) -> Option<usize> {
        DynList::index_of(self, item)
    }
}
