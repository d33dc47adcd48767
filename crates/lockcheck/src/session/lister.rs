//! Inventory listing.

use std::io::Write;

use lockcheck_core::format::{format_inventory_header, format_no_locks, format_record};
use lockcheck_core::{LockBackend, LockRecord, SessionError};
use tracing::debug;

use super::emit;
use crate::prelude::*;

/// Lists every lock held by `backend` and prints the inventory.
///
/// A listing failure is returned before anything is printed. An empty
/// backend prints only the "no locks found" notice.
pub async fn list_inventory<W: Write>(
    backend: &dyn LockBackend,
    out: &mut W,
) -> Result<Vec<LockRecord>, SessionError> {
    let target = backend.target_display();
    let records = backend.list().await?;

    debug!(store = %target, count = records.len(), "listed locks");

    if records.is_empty() {
        emit(out, p_y(&format_no_locks(&target)))?;
        return Ok(records);
    }

    emit(out, p_c(&format_inventory_header(&target, records.len())))?;
    for record in &records {
        emit(
            out,
            format!("  {}", format_record(backend.identity_label(), record)),
        )?;
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::InMemoryBackend;
    use lockcheck_core::BackendError;

    #[tokio::test]
    async fn test_empty_backend_prints_notice() {
        let backend = InMemoryBackend::container(Vec::new());
        let mut out: Vec<u8> = Vec::new();

        let records = list_inventory(&backend, &mut out).await.unwrap();

        assert!(records.is_empty());
        assert_eq!(strip(&out), "No locks found in in-memory container.\n");
    }

    #[tokio::test]
    async fn test_records_are_printed_with_fields() {
        let backend = InMemoryBackend::table(vec![
            LockRecord::new("L1").unwrap().with_field("Info", "build"),
            LockRecord::new("L2").unwrap(),
        ]);
        let mut out: Vec<u8> = Vec::new();

        let records = list_inventory(&backend, &mut out).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            strip(&out),
            "Current locks in in-memory table (2):\n  LockID: L1, Info: build\n  LockID: L2\n"
        );
    }

    #[tokio::test]
    async fn test_list_failure_prints_nothing() {
        let backend = InMemoryBackend::table(vec![LockRecord::new("L1").unwrap()])
            .with_list_failure("access denied");
        let mut out: Vec<u8> = Vec::new();

        let result = list_inventory(&backend, &mut out).await;

        assert_eq!(
            result,
            Err(SessionError::Backend(BackendError::List(
                "access denied".to_string()
            )))
        );
        assert!(out.is_empty());
    }
}
