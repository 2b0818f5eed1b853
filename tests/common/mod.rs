//! Shared test utilities and fixtures.

#![allow(dead_code)]

use expanse::{check_well_formed, Collection};

/// Builds a string collection from comma-separated test data, e.g.
/// `"Ivan, Stephan, Dimitar"`. The empty string builds an empty collection,
/// which keeps data-driven cases uniform.
pub fn names(data: &str) -> Collection<String> {
    Collection::from_items(
        data.split(", ")
            .filter(|part| !part.is_empty())
            .map(str::to_string),
    )
}

/// Builds an integer collection from comma-separated test data, e.g.
/// `"5, 16, 271"`.
pub fn numbers(data: &str) -> Collection<i32> {
    Collection::from_items(
        data.split(", ")
            .filter(|part| !part.is_empty())
            .map(|part| part.parse().expect("test data must be integers")),
    )
}

/// Asserts every structural law holds, with the violation in the message.
pub fn assert_well_formed<T>(collection: &Collection<T>) {
    if let Err(violation) = check_well_formed(collection) {
        panic!("collection not well-formed: {violation}");
    }
}
