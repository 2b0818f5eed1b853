// Copyright 2026-present Expanse contributors
// SPDX-License-Identifier: Apache-2.0

//! The collection itself: a growable, order-preserving container with an
//! explicit capacity budget.
//!
//! `Vec` already grows, so why track capacity by hand? Because `Vec::capacity`
//! is a hint, not a contract - the allocator may hand back more than asked.
//! This container's capacity is part of its observable behavior (floor of 16,
//! doubling growth, never shrinking), so it owns the number and keeps the
//! backing `Vec` reserved to at least that budget.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Capacity law**: `count() <= capacity()` after every operation.
//! - **Floor**: `capacity() >= DEFAULT_CAPACITY` from construction onward.
//! - **Monotonicity**: capacity never decreases; `clear` resets the count only.
//! - **Reject-before-mutate**: every fallible operation checks bounds before
//!   touching the elements, so a failed call leaves the container untouched.
//!
//! Rather than trusting yourself to remember these, `verify::check_well_formed`
//! re-derives all of them from a borrowed container; the property suites call
//! it after every mutation sequence.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::CollectionError;

/// Capacity floor for every container, including empty ones.
///
/// Construction never allocates less than this, and growth never goes below
/// it, so small containers get a predictable, comparison-stable capacity.
pub const DEFAULT_CAPACITY: usize = 16;

/// Geometric growth factor. Doubling keeps total copy work across N appends
/// at O(N), which is what makes `add` amortized O(1).
const GROWTH_FACTOR: usize = 2;

/// A growable, order-preserving container with an explicit capacity budget.
///
/// Elements occupy logical positions `[0, count)`. Every index-taking
/// operation validates its indices up front and reports a single error kind,
/// [`CollectionError::IndexOutOfRange`], on any violation.
///
/// # Example
///
/// ```
/// use expanse::Collection;
///
/// let mut names = Collection::from_items(["Ivan", "Stephan", "Dimitar"]);
/// names.insert_at(0, "Peter")?;
/// names.remove_at(2)?;
/// assert_eq!(names.to_string(), "[Peter, Ivan, Dimitar]");
/// assert_eq!(names.capacity(), 16);
/// # Ok::<(), expanse::CollectionError>(())
/// ```
pub struct Collection<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Collection<T> {
    /// Creates an empty collection with the default capacity budget.
    pub fn new() -> Self {
        Collection {
            items: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Creates a collection holding `items` in iteration order.
    ///
    /// The capacity budget is `max(DEFAULT_CAPACITY, count)`, so the initial
    /// elements never trigger growth past the floor.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        let capacity = items.len().max(DEFAULT_CAPACITY);
        let mut collection = Collection { items, capacity };
        collection.reserve_backing();
        collection
    }

    /// Number of logically present elements.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Current capacity budget. Always `>= count()` and `>= DEFAULT_CAPACITY`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the collection holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `item` at the logical end, growing the budget first if full.
    pub fn add(&mut self, item: T) {
        self.grow_to(self.items.len() + 1);
        self.items.push(item);
    }

    /// Appends every element of `items` in iteration order.
    ///
    /// When the iterator reports an exact size, the budget grows once up
    /// front; otherwise each append grows geometrically, which is still
    /// amortized linear overall.
    pub fn add_range<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let iter = items.into_iter();
        let (lower, upper) = iter.size_hint();
        if upper == Some(lower) {
            self.grow_to(self.items.len() + lower);
        }
        for item in iter {
            self.add(item);
        }
    }

    /// Borrows the element at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `index >= count()`.
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        self.check_index(index)?;
        Ok(&self.items[index])
    }

    /// Mutably borrows the element at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `index >= count()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
        self.check_index(index)?;
        Ok(&mut self.items[index])
    }

    /// Replaces the element at `index` with `value`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `index >= count()`; the old element stays put.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        self.check_index(index)?;
        self.items[index] = value;
        Ok(())
    }

    /// Inserts `item` so it becomes the element at `index`, shifting the
    /// tail one position right. `index == count()` appends.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `index > count()`; no shift happens on failure.
    pub fn insert_at(&mut self, index: usize, item: T) -> Result<(), CollectionError> {
        let count = self.items.len();
        if index > count {
            return Err(CollectionError::IndexOutOfRange { index, count });
        }
        self.grow_to(count + 1);
        self.items.insert(index, item);
        Ok(())
    }

    /// Swaps the elements at `index1` and `index2`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when either index is `>= count()`. Both indices are
    /// validated before any element moves, so a half-swap cannot happen.
    pub fn exchange(&mut self, index1: usize, index2: usize) -> Result<(), CollectionError> {
        self.check_index(index1)?;
        self.check_index(index2)?;
        self.items.swap(index1, index2);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the tail one
    /// position left. Capacity does not shrink.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `index >= count()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Drops every element. The capacity budget is retained.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates over the logical elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterates mutably over the logical elements in order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// The logical elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// The logical elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Allocation actually held by the backing store. `verify` checks this
    /// never falls below the reported budget.
    pub(crate) fn backing_capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Consumes the collection, handing back the logical elements.
    pub(crate) fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Raises the capacity budget until it covers `needed`, doubling each
    /// step. A no-op when the budget already suffices, so callers invoke it
    /// unconditionally on the append paths.
    fn grow_to(&mut self, needed: usize) {
        if needed <= self.capacity {
            return;
        }
        let mut capacity = self.capacity;
        while capacity < needed {
            capacity = capacity.saturating_mul(GROWTH_FACTOR);
        }
        self.capacity = capacity;
        self.reserve_backing();
    }

    /// Keeps the backing `Vec` reserved to at least the capacity budget.
    fn reserve_backing(&mut self) {
        if self.items.capacity() < self.capacity {
            let missing = self.capacity - self.items.len();
            self.items.reserve(missing);
        }
    }

    fn check_index(&self, index: usize) -> Result<(), CollectionError> {
        let count = self.items.len();
        if index < count {
            Ok(())
        } else {
            Err(CollectionError::IndexOutOfRange { index, count })
        }
    }
}

impl<T: fmt::Display> Collection<T> {
    /// The canonical bracketed rendering, `"[e1, e2, ..., en]"`.
    ///
    /// Identical to `to_string()`; exists so call sites can name the format
    /// they rely on.
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }
}

/// Canonical rendering: comma-and-space separated elements inside brackets,
/// `"[]"` when empty. Elements render through their own `Display`, so a
/// collection of collections nests recursively with no special casing.
impl<T: fmt::Display> fmt::Display for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (position, item) in self.items.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("items", &self.items)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T: Clone> Clone for Collection<T> {
    fn clone(&self) -> Self {
        let mut clone = Collection {
            items: self.items.clone(),
            capacity: self.capacity,
        };
        clone.reserve_backing();
        clone
    }
}

/// Equality is over the logical elements only. Capacity is a growth-policy
/// artifact and two containers with the same contents compare equal even
/// when their histories differ.
impl<T: PartialEq> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Collection<T> {}

/// Panicking counterpart of [`Collection::get`], for contexts that have
/// already validated the index. The `Result` API is the contract surface.
impl<T> Index<usize> for Collection<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for Collection<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}
