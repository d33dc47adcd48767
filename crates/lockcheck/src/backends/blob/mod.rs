//! Azure Blob Storage lock backend.
//!
//! Terraform's `azurerm` backend locks a state file by leasing its blob, so
//! every blob in the container is reported as a lock candidate. Blob names
//! are kept byte for byte: the listed name is the name sent to delete.

mod error;

pub use error::resolve_delete;

use async_trait::async_trait;
use azure_core::RetryOptions;
use azure_storage::StorageCredentials;
use azure_storage_blobs::prelude::{ClientBuilder, ContainerClient};
use futures_util::StreamExt;
use lockcheck_core::{AzureBlobConfig, BackendKind, LockBackend, LockRecord, Result};
use tracing::debug;

use self::error::map_list_error;

/// Azure Blob container backend using shared-key credentials.
#[derive(Debug, Clone)]
pub struct AzureBlobBackend {
    container: ContainerClient,
    target: String,
}

impl AzureBlobBackend {
    /// Builds a container client from `config`.
    ///
    /// No request is made until the first listing. SDK retries are disabled.
    pub fn connect(config: &AzureBlobConfig) -> Result<Self> {
        let credentials = StorageCredentials::access_key(
            config.account_name.clone(),
            config.account_key.clone(),
        );
        let container = ClientBuilder::new(config.account_name.clone(), credentials)
            .retry(RetryOptions::none())
            .container_client(config.container_name.clone());

        debug!(
            account = %config.account_name,
            container = %config.container_name,
            "configured Azure Blob container client"
        );

        Ok(Self {
            container,
            target: config.target_display(),
        })
    }
}

/// Pure function: one record per blob name, names untouched.
pub fn blob_records<I>(names: I) -> Result<Vec<LockRecord>>
where
    I: IntoIterator<Item = String>,
{
    names.into_iter().map(LockRecord::new).collect()
}

#[async_trait]
impl LockBackend for AzureBlobBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Azure
    }

    fn identity_label(&self) -> &str {
        "BlobName"
    }

    fn target_display(&self) -> String {
        self.target.clone()
    }

    async fn list(&self) -> Result<Vec<LockRecord>> {
        // No delimiter: the listing is flat across virtual directories.
        let mut pages = self.container.list_blobs().into_stream();
        let mut names = Vec::new();

        while let Some(page) = pages.next().await {
            let page = page.map_err(map_list_error)?;
            names.extend(page.blobs.blobs().map(|blob| blob.name.clone()));
        }

        debug!(store = %self.target, count = names.len(), "listed blobs");

        blob_records(names)
    }

    async fn delete(&self, identity: &str) -> Result<()> {
        let result = self
            .container
            .blob_client(identity)
            .delete()
            .await
            .map(|_| ());

        resolve_delete(result, identity)
    }
}
