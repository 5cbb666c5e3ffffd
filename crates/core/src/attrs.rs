use crate::error::ValidationError;
use crate::schema::ContentSchema;

/// Insertion-ordered attribute storage for a single element node.
///
/// Values stay raw strings until a renderer or validator interprets them; no
/// coercion happens at store time. Emission order is part of the observable
/// rendering contract, so entries keep their first-insertion position even
/// when overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeStore {
    entries: Vec<(String, String)>,
}

impl AttributeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `name` after checking the kind's allow-list.
    ///
    /// Unknown names fail immediately, while the parser is still consuming
    /// the source tag; required-attribute and value checks are deferred to
    /// validation. `tag` is only used for the error message.
    pub fn set(
        &mut self,
        schema: &ContentSchema,
        tag: &str,
        name: &str,
        value: &str,
    ) -> Result<(), ValidationError> {
        if !schema.allows_attribute(name) {
            return Err(ValidationError::UnknownAttribute {
                name: name.to_string(),
                tag: tag.to_string(),
            });
        }
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value.to_string();
        } else {
            self.entries.push((name.to_string(), value.to_string()));
        }
        Ok(())
    }

    /// Returns the stored raw value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of stored attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no attribute has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
