//! In-memory lock backend.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use lockcheck_core::{BackendError, BackendKind, LockBackend, LockRecord, Result};
use tokio::sync::RwLock;

/// In-memory storage backend for testing.
///
/// Records are kept in insertion order. Listing and individual deletions can
/// be made to fail, and every delete call is remembered. Clones share state,
/// so a test can keep a handle after boxing one into the session.
#[derive(Debug, Clone)]
pub struct InMemoryBackend {
    kind: BackendKind,
    label: String,
    target: String,
    records: Arc<RwLock<Vec<LockRecord>>>,
    delete_calls: Arc<RwLock<Vec<String>>>,
    list_failure: Option<String>,
    delete_failures: HashSet<String>,
}

impl InMemoryBackend {
    /// A backend shaped like a DynamoDB lock table.
    pub fn table(records: Vec<LockRecord>) -> Self {
        Self::new(BackendKind::Aws, "LockID", "in-memory table", records)
    }

    /// A backend shaped like a blob container.
    pub fn container(records: Vec<LockRecord>) -> Self {
        Self::new(BackendKind::Azure, "BlobName", "in-memory container", records)
    }

    pub fn new(
        kind: BackendKind,
        label: impl Into<String>,
        target: impl Into<String>,
        records: Vec<LockRecord>,
    ) -> Self {
        Self {
            kind,
            label: label.into(),
            target: target.into(),
            records: Arc::new(RwLock::new(records)),
            delete_calls: Arc::new(RwLock::new(Vec::new())),
            list_failure: None,
            delete_failures: HashSet::new(),
        }
    }

    /// Makes every `list` call fail with `message`.
    pub fn with_list_failure(mut self, message: impl Into<String>) -> Self {
        self.list_failure = Some(message.into());
        self
    }

    /// Makes deleting `identity` fail.
    pub fn with_delete_failure(mut self, identity: impl Into<String>) -> Self {
        self.delete_failures.insert(identity.into());
        self
    }

    /// Identities still stored.
    pub async fn identities(&self) -> Vec<String> {
        let records = self.records.read().await;
        records.iter().map(|r| r.identity().to_string()).collect()
    }

    /// Identities passed to `delete`, in call order.
    pub async fn delete_calls(&self) -> Vec<String> {
        self.delete_calls.read().await.clone()
    }
}

#[async_trait]
impl LockBackend for InMemoryBackend {
    fn kind(&self) -> BackendKind {
        self.kind
    }

    fn identity_label(&self) -> &str {
        &self.label
    }

    fn target_display(&self) -> String {
        self.target.clone()
    }

    async fn list(&self) -> Result<Vec<LockRecord>> {
        if let Some(message) = &self.list_failure {
            return Err(BackendError::List(message.clone()));
        }

        let records = self.records.read().await;
        Ok(records.clone())
    }

    async fn delete(&self, identity: &str) -> Result<()> {
        self.delete_calls.write().await.push(identity.to_string());

        if self.delete_failures.contains(identity) {
            return Err(BackendError::Delete {
                identity: identity.to_string(),
                message: "simulated failure".to_string(),
            });
        }

        let mut records = self.records.write().await;
        records.retain(|r| r.identity() != identity);
        Ok(())
    }
}
