//! Decoded trait listings and the trait → values mapping.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::galaxy::decode::hex_to_string;
use crate::galaxy::types::GalaxyError;

/// Ordered mapping from trait name to its available values.
///
/// Iteration and serialization follow insertion order. Re-inserting a name
/// replaces its values but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraitCatalog {
    entries: Vec<(String, Vec<String>)>,
}

impl TraitCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, values: Vec<String>) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = values,
            None => self.entries.push((name, values)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}

impl Serialize for TraitCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, values) in &self.entries {
            map.serialize_entry(name, values)?;
        }
        map.end()
    }
}

/// Pair encoded trait names with their encoded value lists and decode both.
///
/// The two sequences must have the same length.
pub fn build_catalog(
    traits: &[String],
    values: &[Vec<String>],
) -> Result<TraitCatalog, GalaxyError> {
    if traits.len() != values.len() {
        return Err(GalaxyError::LengthMismatch {
            traits: traits.len(),
            values: values.len(),
        });
    }

    let mut catalog = TraitCatalog::new();
    for (name, encoded_values) in traits.iter().zip(values) {
        let name = hex_to_string(name)?;
        let decoded = encoded_values
            .iter()
            .map(|v| hex_to_string(v))
            .collect::<Result<Vec<_>, _>>()?;
        catalog.insert(name, decoded);
    }
    Ok(catalog)
}
