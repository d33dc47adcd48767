//! DynamoDB attribute conversion functions.
//!
//! Pure functions for turning scanned items into lock records. These are
//! testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::operation::scan::ScanOutput;
use aws_sdk_dynamodb::types::AttributeValue;
use lockcheck_core::{BackendError, LockRecord, Result};

/// Convert a scanned item into a lock record.
///
/// The `key_name` attribute becomes the identity; every other attribute is
/// kept as a display field.
pub fn item_to_record(
    item: &HashMap<String, AttributeValue>,
    key_name: &str,
) -> Result<LockRecord> {
    let identity = match item.get(key_name) {
        Some(AttributeValue::S(value)) if !value.is_empty() => value.clone(),
        Some(other) => {
            return Err(BackendError::InvalidRecord(format!(
                "attribute '{}' is not a non-empty string: {}",
                key_name,
                attribute_to_display(other)
            )))
        }
        None => {
            return Err(BackendError::InvalidRecord(format!(
                "item is missing key attribute '{}'",
                key_name
            )))
        }
    };

    let record = item
        .iter()
        .filter(|(name, _)| name.as_str() != key_name)
        .fold(LockRecord::new(identity)?, |record, (name, value)| {
            record.with_field(name, attribute_to_display(value))
        });

    Ok(record)
}

/// Flatten every scanned page into records, in page order.
///
/// A scan is only complete once the page without `LastEvaluatedKey` has been
/// read, so callers pass all pages, not just the first.
pub fn records_from_pages(pages: &[ScanOutput], key_name: &str) -> Result<Vec<LockRecord>> {
    pages
        .iter()
        .flat_map(|page| page.items())
        .map(|item| item_to_record(item, key_name))
        .collect()
}

/// Render an attribute value as plain text.
pub fn attribute_to_display(value: &AttributeValue) -> String {
    match value {
        AttributeValue::S(s) => s.clone(),
        AttributeValue::N(n) => n.clone(),
        AttributeValue::Bool(b) => b.to_string(),
        AttributeValue::Null(_) => "null".to_string(),
        AttributeValue::Ss(values) | AttributeValue::Ns(values) => values.join(", "),
        AttributeValue::B(blob) => format!("<{} bytes>", blob.as_ref().len()),
        other => format!("{:?}", other),
    }
}
