//! Optional serde support, gated behind the `serde` feature.
//!
//! A collection serializes as a plain sequence of its logical elements.
//! Capacity is a growth-policy artifact, not data, so it is not written out;
//! deserialization rebuilds it as `max(DEFAULT_CAPACITY, count)` exactly as
//! construction from elements would.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::collection::Collection;

impl<T: Serialize> Serialize for Collection<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Collection<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(Collection::from_items(items))
    }
}
