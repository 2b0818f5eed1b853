// Copyright 2026-present Expanse contributors
// SPDX-License-Identifier: Apache-2.0

//! Invariant checks that re-derive the container's laws from the outside.
//!
//! The operations in `collection` are written to preserve these laws, but
//! "written to" is not "checked to". This module is the checked half: the
//! property suites run [`check_well_formed`] after every mutation sequence,
//! so a regression in the growth or bounds logic fails loudly instead of
//! surfacing three tests later as a wrong capacity.

use std::fmt;

use crate::collection::{Collection, DEFAULT_CAPACITY};

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// More logical elements than the capacity budget allows.
    CountExceedsCapacity { count: usize, capacity: usize },
    /// The capacity budget fell below the construction floor.
    CapacityBelowFloor { capacity: usize, floor: usize },
    /// The backing store holds less allocation than the reported budget.
    BackingStoreMismatch { reserved: usize, capacity: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::CountExceedsCapacity { count, capacity } => {
                write!(f, "count {} > capacity {}", count, capacity)
            }
            InvariantError::CapacityBelowFloor { capacity, floor } => {
                write!(f, "capacity {} < floor {}", capacity, floor)
            }
            InvariantError::BackingStoreMismatch { reserved, capacity } => {
                write!(
                    f,
                    "backing store reserves {} but budget is {}",
                    reserved, capacity
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Checks every structural law of a collection.
///
/// - `count <= capacity`
/// - `capacity >= DEFAULT_CAPACITY`
/// - the backing store can hold `capacity` elements without reallocating
///
/// # Errors
///
/// The first violated law, as an [`InvariantError`].
pub fn check_well_formed<T>(collection: &Collection<T>) -> Result<(), InvariantError> {
    let count = collection.count();
    let capacity = collection.capacity();

    if count > capacity {
        return Err(InvariantError::CountExceedsCapacity { count, capacity });
    }
    if capacity < DEFAULT_CAPACITY {
        return Err(InvariantError::CapacityBelowFloor {
            capacity,
            floor: DEFAULT_CAPACITY,
        });
    }
    let reserved = collection.backing_capacity();
    if reserved < capacity {
        return Err(InvariantError::BackingStoreMismatch { reserved, capacity });
    }
    Ok(())
}
