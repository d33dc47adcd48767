//! AWS SDK client setup (Imperative Shell).

use aws_config::retry::RetryConfig;
use aws_sdk_dynamodb::types::{KeySchemaElement, KeyType};
use aws_sdk_dynamodb::Client;
use lockcheck_core::config::LEGACY_LOCK_KEY;
use lockcheck_core::{DynamoDbConfig, Result};

use super::error::map_describe_table_error;

/// Creates a DynamoDB client with the given configuration.
///
/// SDK retries are disabled: every failure is surfaced to the operator once.
pub async fn create_client(config: &DynamoDbConfig) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()))
        .retry_config(RetryConfig::disabled());

    if let Some(endpoint) = &config.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}

/// Fetches the table description and returns its partition key name.
///
/// Falls back to `LockID` when the description carries no key schema.
pub async fn describe_partition_key(client: &Client, table_name: &str) -> Result<String> {
    let response = client
        .describe_table()
        .table_name(table_name)
        .send()
        .await
        .map_err(|e| map_describe_table_error(e, table_name))?;

    let key_name = response
        .table()
        .and_then(|table| partition_key_name(table.key_schema()))
        .unwrap_or_else(|| LEGACY_LOCK_KEY.to_string());

    Ok(key_name)
}

/// Pure function: the `HASH` attribute of a key schema.
pub fn partition_key_name(key_schema: &[KeySchemaElement]) -> Option<String> {
    key_schema
        .iter()
        .find(|element| element.key_type() == &KeyType::Hash)
        .map(|element| element.attribute_name().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(name: &str, key_type: KeyType) -> KeySchemaElement {
        KeySchemaElement::builder()
            .attribute_name(name)
            .key_type(key_type)
            .build()
            .unwrap()
    }

    #[test]
    fn test_partition_key_name_picks_hash_key() {
        let schema = vec![
            element("SK", KeyType::Range),
            element("LockID", KeyType::Hash),
        ];
        assert_eq!(partition_key_name(&schema), Some("LockID".to_string()));
    }

    #[test]
    fn test_partition_key_name_custom_key() {
        let schema = vec![element("lock_id", KeyType::Hash)];
        assert_eq!(partition_key_name(&schema), Some("lock_id".to_string()));
    }

    #[test]
    fn test_partition_key_name_empty_schema() {
        assert_eq!(partition_key_name(&[]), None);
    }
}
