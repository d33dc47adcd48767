//! Pure text rendering for the inventory and unlock pass.

use crate::record::LockRecord;
use crate::unlock::UnlockSummary;

/// Notice printed when a store holds no locks.
pub fn format_no_locks(target: &str) -> String {
    format!("No locks found in {}.", target)
}

/// Header printed above a non-empty inventory.
pub fn format_inventory_header(target: &str, count: usize) -> String {
    format!("Current locks in {} ({}):", target, count)
}

/// Format a record on a single line: `LockID: L1, Info: build, Operation: apply`.
pub fn format_record(label: &str, record: &LockRecord) -> String {
    let mut output = format!("{}: {}", label, record.identity());
    for (key, value) in record.display_info() {
        output.push_str(&format!(", {}: {}", key, value));
    }
    output
}

/// Question asked before deleting a record.
pub fn format_unlock_prompt(label: &str, record: &LockRecord) -> String {
    format!("Do you want to unlock {} {}? (y/n)", label, record.identity())
}

pub fn format_deleted(label: &str, identity: &str) -> String {
    format!("Deleted {} {}", label, identity)
}

pub fn format_delete_failed(label: &str, identity: &str, error: &impl std::fmt::Display) -> String {
    format!("Failed to delete {} {}: {}", label, identity, error)
}

/// Closing line of an unlock pass.
pub fn format_summary(summary: &UnlockSummary) -> String {
    format!(
        "{} deleted, {} kept, {} failed.",
        summary.deleted, summary.declined, summary.failed
    )
}
