//! Visitor-key tables.
//!
//! A visitor-key table tells a generic traversal which child fields of each
//! node type to descend into, in order. Tables from the host and template
//! parsers are merged when a composite result is built.

use std::collections::BTreeMap;

/// Mapping from node-type name to the ordered list of child-field names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitorKeys {
    keys: BTreeMap<String, Vec<String>>,
}

impl VisitorKeys {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            keys: BTreeMap::new(),
        }
    }

    /// Sets the child fields for `kind`, replacing any previous entry.
    pub fn insert<I, S>(&mut self, kind: impl Into<String>, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys
            .insert(kind.into(), fields.into_iter().map(Into::into).collect());
    }

    /// Appends `field` to the entry for `kind` unless it is already listed.
    ///
    /// Creates the entry when `kind` has not been seen before.
    pub fn record_field(&mut self, kind: &str, field: &str) {
        let fields = self.keys.entry(kind.to_owned()).or_default();
        if !fields.iter().any(|known| known == field) {
            fields.push(field.to_owned());
        }
    }

    /// Ensures an entry exists for `kind`, without adding fields.
    pub fn record_kind(&mut self, kind: &str) {
        self.keys.entry(kind.to_owned()).or_default();
    }

    /// Merges `other` into this table. Entries from `other` win on
    /// colliding node types.
    pub fn merge(&mut self, other: &Self) {
        for (kind, fields) in &other.keys {
            self.keys.insert(kind.clone(), fields.clone());
        }
    }

    /// Returns the child fields registered for `kind`.
    #[must_use]
    pub fn get(&self, kind: &str) -> Option<&[String]> {
        self.keys.get(kind).map(Vec::as_slice)
    }

    /// Returns `true` if `kind` has an entry.
    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        self.keys.contains_key(kind)
    }

    /// Returns the number of node types in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over `(kind, fields)` pairs in node-type order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.keys
            .iter()
            .map(|(kind, fields)| (kind.as_str(), fields.as_slice()))
    }
}

impl<K, I, S> FromIterator<(K, I)> for VisitorKeys
where
    K: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (kind, fields) in iter {
            table.insert(kind, fields);
        }
        table
    }
}
