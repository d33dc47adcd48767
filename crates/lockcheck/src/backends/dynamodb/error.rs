//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `BackendError` from `lockcheck_core`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use lockcheck_core::BackendError;

/// Map a DescribeTable SDK error to a connection failure.
pub fn map_describe_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DescribeTableError, R>,
    table_name: &str,
) -> BackendError {
    match err.into_service_error() {
        DescribeTableError::ResourceNotFoundException(_) => {
            BackendError::Connection(format!("Table '{}' not found", table_name))
        }
        DescribeTableError::InternalServerError(_) => {
            BackendError::Connection("DynamoDB internal server error".to_string())
        }
        err => BackendError::Connection(format!(
            "DescribeTable failed: {}",
            DisplayErrorContext(&err)
        )),
    }
}

/// Map a Scan SDK error to a listing failure.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> BackendError {
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => {
            BackendError::List("Table not found".to_string())
        }
        ScanError::ProvisionedThroughputExceededException(_) => {
            BackendError::List("Throughput exceeded".to_string())
        }
        ScanError::RequestLimitExceeded(_) => {
            BackendError::List("Request limit exceeded".to_string())
        }
        ScanError::InternalServerError(_) => {
            BackendError::List("DynamoDB internal server error".to_string())
        }
        err => BackendError::List(format!("Scan failed: {}", DisplayErrorContext(&err))),
    }
}

/// Map a DeleteItem SDK error to a single-record failure.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
    identity: &str,
) -> BackendError {
    let message = match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => "Table not found".to_string(),
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            "Throughput exceeded".to_string()
        }
        DeleteItemError::RequestLimitExceeded(_) => "Request limit exceeded".to_string(),
        DeleteItemError::TransactionConflictException(_) => "Transaction conflict".to_string(),
        DeleteItemError::InternalServerError(_) => "DynamoDB internal server error".to_string(),
        err => format!("DeleteItem failed: {}", DisplayErrorContext(&err)),
    };

    BackendError::Delete {
        identity: identity.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::error::{InternalServerError, ResourceNotFoundException};

    fn service_error<E>(err: E) -> SdkError<E, ()> {
        SdkError::service_error(err, ())
    }

    #[test]
    fn test_describe_table_not_found_is_connection_error() {
        let err = service_error(DescribeTableError::ResourceNotFoundException(
            ResourceNotFoundException::builder().build(),
        ));
        assert_eq!(
            map_describe_table_error(err, "terraform-locks"),
            BackendError::Connection("Table 'terraform-locks' not found".to_string())
        );
    }

    #[test]
    fn test_scan_error_is_list_error() {
        let err = service_error(ScanError::InternalServerError(
            InternalServerError::builder().build(),
        ));
        assert_eq!(
            map_scan_error(err),
            BackendError::List("DynamoDB internal server error".to_string())
        );
    }

    #[test]
    fn test_delete_error_carries_identity() {
        let err = service_error(DeleteItemError::ResourceNotFoundException(
            ResourceNotFoundException::builder().build(),
        ));
        assert_eq!(
            map_delete_item_error(err, "L1"),
            BackendError::Delete {
                identity: "L1".to_string(),
                message: "Table not found".to_string(),
            }
        );
    }
}
