//! DynamoDB lock table backend.
//!
//! Terraform's S3 backend keeps one item per lock, keyed by `LockID`, with the
//! lock metadata in `Info` and state checksums in `Digest`.

mod client;
mod conversions;
mod error;

pub use client::{create_client, describe_partition_key, partition_key_name};
pub use conversions::{attribute_to_display, item_to_record, records_from_pages};

use async_trait::async_trait;
use aws_sdk_dynamodb::operation::scan::ScanOutput;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use lockcheck_core::{BackendKind, DynamoDbConfig, LockBackend, LockRecord, Result};
use tracing::debug;

use self::error::{map_delete_item_error, map_scan_error};

/// DynamoDB-based lock backend.
pub struct DynamoDbBackend {
    client: Client,
    table_name: String,
    key_name: String,
    target: String,
}

impl DynamoDbBackend {
    /// Creates a backend from an existing client.
    pub fn new(
        client: Client,
        table_name: impl Into<String>,
        key_name: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            key_name: key_name.into(),
            target: target.into(),
        }
    }

    /// Builds a client for `config` and verifies the table exists, reading
    /// its partition key from the key schema.
    pub async fn connect(config: &DynamoDbConfig) -> Result<Self> {
        let client = create_client(config).await;
        let key_name = describe_partition_key(&client, &config.table_name).await?;

        debug!(
            table = %config.table_name,
            key = %key_name,
            "connected to DynamoDB lock table"
        );

        Ok(Self::new(
            client,
            &config.table_name,
            key_name,
            config.target_display(),
        ))
    }
}

#[async_trait]
impl LockBackend for DynamoDbBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Aws
    }

    fn identity_label(&self) -> &str {
        &self.key_name
    }

    fn target_display(&self) -> String {
        self.target.clone()
    }

    async fn list(&self) -> Result<Vec<LockRecord>> {
        let pages: Vec<ScanOutput> = self
            .client
            .scan()
            .table_name(&self.table_name)
            .into_paginator()
            .send()
            .collect::<std::result::Result<Vec<_>, _>>()
            .await
            .map_err(map_scan_error)?;

        debug!(table = %self.table_name, pages = pages.len(), "scanned lock table");

        records_from_pages(&pages, &self.key_name)
    }

    async fn delete(&self, identity: &str) -> Result<()> {
        // DeleteItem on a missing key succeeds, so no existence check here.
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(&self.key_name, AttributeValue::S(identity.to_string()))
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, identity))?;

        debug!(table = %self.table_name, %identity, "deleted lock item");
        Ok(())
    }
}
