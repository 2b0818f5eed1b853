//! Construction paths: empty, from elements, from conversions.

use super::common::{assert_well_formed, names, numbers};
use expanse::{Collection, DEFAULT_CAPACITY};

#[test]
fn empty_constructor_renders_empty_brackets() {
    let collection: Collection<i32> = Collection::new();
    assert_eq!(collection.to_string(), "[]");
}

#[test]
fn constructor_single_item() {
    let collection = Collection::from_items([5]);
    assert_eq!(collection.to_string(), "[5]");
}

#[test]
fn constructor_multiple_items() {
    let collection = Collection::from_items([5, 16, 271]);
    assert_eq!(collection.to_string(), "[5, 16, 271]");
}

#[test]
fn constructor_data_driven() {
    // (input data, expected rendering)
    let cases = [("", "[]"), ("5", "[5]"), ("5, 16, 271", "[5, 16, 271]")];
    for (data, expected) in cases {
        let collection = numbers(data);
        assert_eq!(collection.to_string(), expected, "data: {data:?}");
        assert_well_formed(&collection);
    }
}

#[test]
fn count_and_capacity_report_the_floor() {
    let collection = names("Ivan, Stephan, Dimitar");
    assert_eq!(collection.count(), 3);
    assert_eq!(collection.capacity(), 16);
}

#[test]
fn construction_larger_than_the_floor_fits_without_growth() {
    let collection = Collection::from_items(0..100);
    assert_eq!(collection.count(), 100);
    assert_eq!(collection.capacity(), 100);
    assert_well_formed(&collection);
}

#[test]
fn from_vec_and_from_array_agree() {
    let from_vec = Collection::from(vec![1, 2, 3]);
    let from_array = Collection::from([1, 2, 3]);
    assert_eq!(from_vec, from_array);
    assert_eq!(from_vec.to_string(), "[1, 2, 3]");
}

#[test]
fn from_iterator_collects_in_order() {
    let collection: Collection<i32> = (1..=4).collect();
    assert_eq!(collection.to_string(), "[1, 2, 3, 4]");
}

#[test]
fn default_is_empty_with_floor_capacity() {
    let collection: Collection<String> = Collection::default();
    assert!(collection.is_empty());
    assert_eq!(collection.capacity(), DEFAULT_CAPACITY);
}
