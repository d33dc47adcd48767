//! The unified lock entry shape shared by every backend.

use std::collections::BTreeMap;

use crate::error::{BackendError, Result};

/// One lock entry, regardless of where it is stored.
///
/// `identity` is the only value a backend needs to delete the entry: the
/// partition key value for a table, or the blob name for a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockRecord {
    identity: String,
    display_info: BTreeMap<String, String>,
}

impl LockRecord {
    /// Creates a record with no descriptive fields.
    ///
    /// Fails with [`BackendError::InvalidRecord`] when `identity` is empty.
    pub fn new(identity: impl Into<String>) -> Result<Self> {
        let identity = identity.into();
        if identity.is_empty() {
            return Err(BackendError::InvalidRecord(
                "lock identity must not be empty".to_string(),
            ));
        }

        Ok(Self {
            identity,
            display_info: BTreeMap::new(),
        })
    }

    /// Adds a descriptive field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.display_info.insert(key.into(), value.into());
        self
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Descriptive fields, ordered by key.
    pub fn display_info(&self) -> &BTreeMap<String, String> {
        &self.display_info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_identity() {
        let result = LockRecord::new("");
        assert!(matches!(result, Err(BackendError::InvalidRecord(_))));
    }

    #[test]
    fn test_fields_are_ordered_by_key() {
        let record = LockRecord::new("L1")
            .unwrap()
            .with_field("Operation", "apply")
            .with_field("Info", "build");

        let keys: Vec<&str> = record.display_info().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Info", "Operation"]);
        assert_eq!(record.identity(), "L1");
    }

    #[test]
    fn test_with_field_overwrites_existing_key() {
        let record = LockRecord::new("L1")
            .unwrap()
            .with_field("Info", "first")
            .with_field("Info", "second");

        assert_eq!(record.display_info().len(), 1);
        assert_eq!(record.display_info()["Info"], "second");
    }
}
