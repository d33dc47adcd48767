//! Lock backend implementations.
//!
//! Each backend implements [`LockBackend`] from `lockcheck_core`. The session
//! never sees the concrete types: [`connect`] turns a [`BackendConfig`] into a
//! boxed trait object.

pub mod blob;
pub mod dynamodb;
#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

pub use blob::AzureBlobBackend;
pub use dynamodb::DynamoDbBackend;
#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::InMemoryBackend;

use lockcheck_core::{BackendConfig, LockBackend, Result};

/// Builds the backend described by `config`.
pub async fn connect(config: BackendConfig) -> Result<Box<dyn LockBackend>> {
    match config {
        BackendConfig::DynamoDb(config) => {
            let backend = DynamoDbBackend::connect(&config).await?;
            Ok(Box::new(backend))
        }
        BackendConfig::AzureBlob(config) => {
            let backend = AzureBlobBackend::connect(&config)?;
            Ok(Box::new(backend))
        }
    }
}
