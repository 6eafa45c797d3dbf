//! Utilities for use with [serde].

/// Serialize [`None`] as an empty map (`{}`) rather than `null`.
pub mod empty_map_option {
    use serde::{ser::SerializeMap, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }
}
