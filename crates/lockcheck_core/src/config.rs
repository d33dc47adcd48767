//! Connection configuration (Functional Core - pure data).
//!
//! Values are collected once at startup from flags, environment variables
//! and prompts, then passed explicitly into backend construction.

use std::fmt;

use crate::backend::BackendKind;

/// Region used when none is supplied.
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

/// Partition key of the lock table written by Terraform's S3 backend.
pub const LEGACY_LOCK_KEY: &str = "LockID";

/// DynamoDB lock table connection parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamoDbConfig {
    pub region: String,
    pub table_name: String,
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
}

impl DynamoDbConfig {
    /// Returns a display string for the target table.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("DynamoDB table '{}' ({})", self.table_name, url),
            None => format!(
                "DynamoDB table '{}' (region: {})",
                self.table_name, self.region
            ),
        }
    }
}

/// Azure Blob Storage container connection parameters.
#[derive(Clone, PartialEq, Eq)]
pub struct AzureBlobConfig {
    pub account_name: String,
    pub account_key: String,
    pub container_name: String,
}

impl AzureBlobConfig {
    /// Returns a display string for the target container.
    pub fn target_display(&self) -> String {
        format!(
            "Azure Blob container '{}' (account: {})",
            self.container_name, self.account_name
        )
    }
}

impl fmt::Debug for AzureBlobConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AzureBlobConfig")
            .field("account_name", &self.account_name)
            .field("account_key", &"<redacted>")
            .field("container_name", &self.container_name)
            .finish()
    }
}

/// Everything needed to construct one lock backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendConfig {
    DynamoDb(DynamoDbConfig),
    AzureBlob(AzureBlobConfig),
}

impl BackendConfig {
    pub fn kind(&self) -> BackendKind {
        match self {
            BackendConfig::DynamoDb(_) => BackendKind::Aws,
            BackendConfig::AzureBlob(_) => BackendKind::Azure,
        }
    }

    pub fn target_display(&self) -> String {
        match self {
            BackendConfig::DynamoDb(config) => config.target_display(),
            BackendConfig::AzureBlob(config) => config.target_display(),
        }
    }
}
