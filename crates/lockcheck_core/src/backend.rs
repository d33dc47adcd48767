//! The lock backend capability and backend selection.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;

use crate::error::{Result, SessionError};
use crate::record::LockRecord;

/// The storage services a lock can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// AWS DynamoDB lock table.
    Aws,
    /// Azure Blob Storage container.
    Azure,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Aws => "aws",
            BackendKind::Azure => "azure",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = SessionError;

    /// Accepts `aws` or `azure` in any letter case. Surrounding whitespace is
    /// ignored; anything else is an [`SessionError::InvalidSelection`].
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let choice = s.trim();
        if choice.eq_ignore_ascii_case("aws") {
            Ok(BackendKind::Aws)
        } else if choice.eq_ignore_ascii_case("azure") {
            Ok(BackendKind::Azure)
        } else {
            Err(SessionError::InvalidSelection(choice.to_string()))
        }
    }
}

/// A store holding infrastructure state locks.
///
/// Callers only ever see this trait; the concrete service is chosen once at
/// startup.
#[async_trait]
pub trait LockBackend: Send + Sync {
    /// The service this backend talks to.
    fn kind(&self) -> BackendKind;

    /// The name printed in front of a record identity (e.g. `LockID`).
    fn identity_label(&self) -> &str;

    /// Human readable description of the store being inspected.
    fn target_display(&self) -> String;

    /// Returns every lock currently held, following pagination internally.
    async fn list(&self) -> Result<Vec<LockRecord>>;

    /// Deletes the lock with the given identity.
    ///
    /// Deleting an identity that no longer exists succeeds.
    async fn delete(&self, identity: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        for input in ["aws", "AWS", "Aws", " aws\n"] {
            assert_eq!(input.parse::<BackendKind>().unwrap(), BackendKind::Aws);
        }
        for input in ["azure", "AZURE", "Azure"] {
            assert_eq!(input.parse::<BackendKind>().unwrap(), BackendKind::Azure);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_providers() {
        for input in ["gcp", "", "amazon", "aws azure"] {
            let result = input.parse::<BackendKind>();
            assert!(
                matches!(result, Err(SessionError::InvalidSelection(_))),
                "expected '{}' to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        assert_eq!(BackendKind::Aws.to_string().parse::<BackendKind>().unwrap(), BackendKind::Aws);
        assert_eq!(BackendKind::Azure.to_string(), "azure");
    }
}
