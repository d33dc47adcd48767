//! lockcheck_core - Functional core for inspecting and clearing state locks.
//!
//! Everything in this crate is free of I/O: the lock record shape, the
//! backend capability trait, connection configuration, confirmation parsing
//! and the text rendering used by the interactive session.

pub mod backend;
pub mod config;
pub mod error;
pub mod format;
pub mod record;
pub mod unlock;

pub use backend::{BackendKind, LockBackend};
pub use config::{AzureBlobConfig, BackendConfig, DynamoDbConfig};
pub use error::{BackendError, Result, SessionError};
pub use record::LockRecord;
pub use unlock::{Confirmation, UnlockOutcome, UnlockSummary};
