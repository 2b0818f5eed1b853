//! Capacity-aware growable collection with deterministic bounds checking.
//!
//! This crate provides [`Collection<T>`], an order-preserving container that
//! manages its own capacity budget: a floor of 16, doubling growth, and a
//! guarantee that every out-of-range index is rejected before any mutation.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │   error.rs   │◀────│ collection.rs │────▶│   iter.rs    │
//! │ (Collection- │     │ (Collection,  │     │ (IntoIterator│
//! │    Error)    │     │  growth, ops) │     │  From/Extend)│
//! └──────────────┘     └───────────────┘     └──────────────┘
//!                              │
//!                              ▼
//!                      ┌───────────────┐
//!                      │   verify.rs   │
//!                      │ (check_well_  │
//!                      │  formed laws) │
//!                      └───────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use expanse::Collection;
//!
//! let mut collection = Collection::from_items([5, 16, 271]);
//! collection.add(-7);
//! collection.insert_at(0, 1)?;
//!
//! assert_eq!(collection.to_string(), "[1, 5, 16, 271, -7]");
//! assert!(collection.capacity() >= collection.count());
//! # Ok::<(), expanse::CollectionError>(())
//! ```
//!
//! Elements render through their own `Display`, so nested collections come
//! out as nested bracket lists:
//!
//! ```
//! use expanse::Collection;
//!
//! let nested = Collection::from_items([
//!     Collection::from_items([26, 258]),
//!     Collection::new(),
//! ]);
//! assert_eq!(nested.to_string(), "[[26, 258], []]");
//! ```

// Module declarations
mod collection;
mod error;
mod iter;
#[cfg(feature = "serde")]
mod serde_impls;
pub mod verify;

// Re-exports for public API
pub use collection::{Collection, DEFAULT_CAPACITY};
pub use error::CollectionError;
pub use verify::{check_well_formed, InvariantError};
