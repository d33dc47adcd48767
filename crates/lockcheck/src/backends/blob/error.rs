//! Azure SDK error mapping.

use azure_core::error::ErrorKind;
use azure_core::StatusCode;
use lockcheck_core::{BackendError, Result};
use tracing::{debug, info};

fn http_status(err: &azure_core::Error) -> Option<StatusCode> {
    match err.kind() {
        ErrorKind::HttpResponse { status, .. } => Some(*status),
        _ => None,
    }
}

/// Map a listing error to a listing failure.
pub fn map_list_error(err: azure_core::Error) -> BackendError {
    match http_status(&err) {
        Some(StatusCode::NotFound) => BackendError::List("Container not found".to_string()),
        Some(StatusCode::Forbidden) => {
            BackendError::List("Permission denied listing container".to_string())
        }
        Some(StatusCode::Unauthorized) => {
            BackendError::List("Authentication failed, check the account key".to_string())
        }
        _ => BackendError::List(err.to_string()),
    }
}

/// Resolves the result of deleting the blob named exactly `identity`.
///
/// A 404 means the blob is already gone and counts as success. Any other
/// failure only concerns this record.
pub fn resolve_delete(result: azure_core::Result<()>, identity: &str) -> Result<()> {
    let err = match result {
        Ok(()) => {
            debug!(%identity, "deleted blob");
            return Ok(());
        }
        Err(err) => err,
    };

    let message = match http_status(&err) {
        Some(StatusCode::NotFound) => {
            info!(%identity, "blob already gone");
            return Ok(());
        }
        Some(StatusCode::Forbidden) => "Permission denied".to_string(),
        Some(StatusCode::Unauthorized) => {
            "Authentication failed, check the account key".to_string()
        }
        Some(StatusCode::Conflict) => format!("Blob is leased or busy: {}", err),
        _ => err.to_string(),
    };

    Err(BackendError::Delete {
        identity: identity.to_string(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http_error(status: StatusCode, code: &str) -> azure_core::Error {
        azure_core::Error::message(
            ErrorKind::HttpResponse {
                status,
                error_code: Some(code.to_string()),
            },
            "request failed",
        )
    }

    #[test]
    fn test_resolve_delete_success() {
        assert_eq!(resolve_delete(Ok(()), "prod.tfstate"), Ok(()));
    }

    #[test]
    fn test_resolve_delete_not_found_is_success() {
        let result = resolve_delete(
            Err(http_error(StatusCode::NotFound, "BlobNotFound")),
            "prod.tfstate",
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_resolve_delete_permission_denied() {
        let result = resolve_delete(
            Err(http_error(StatusCode::Forbidden, "AuthorizationPermissionMismatch")),
            "prod.tfstate",
        );
        assert_eq!(
            result,
            Err(BackendError::Delete {
                identity: "prod.tfstate".to_string(),
                message: "Permission denied".to_string(),
            })
        );
    }

    #[test]
    fn test_resolve_delete_other_failure_keeps_identity() {
        let result = resolve_delete(
            Err(http_error(StatusCode::Conflict, "LeaseIdMissing")),
            "/prod.tfstate",
        );
        match result {
            Err(BackendError::Delete { identity, message }) => {
                assert_eq!(identity, "/prod.tfstate");
                assert!(message.starts_with("Blob is leased or busy"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_list_not_found_names_container() {
        assert_eq!(
            map_list_error(http_error(StatusCode::NotFound, "ContainerNotFound")),
            BackendError::List("Container not found".to_string())
        );
    }
}
