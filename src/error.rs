// Copyright 2026-present Expanse contributors
// SPDX-License-Identifier: Apache-2.0

//! The one way a collection operation can fail.

use std::fmt;

/// Error type for collection operations.
///
/// Every invalid index produces this same kind, whether the container is
/// empty, the index overshoots by one, or by a mile. Read, write, exchange,
/// and removal accept `[0, count)`; insertion accepts `[0, count]`. The
/// failing operation performs no mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// `index` is outside the valid logical range for the operation.
    IndexOutOfRange { index: usize, count: usize },
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::IndexOutOfRange { index, count } => {
                write!(f, "index {} out of range for count {}", index, count)
            }
        }
    }
}

impl std::error::Error for CollectionError {}
