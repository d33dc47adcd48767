//! The interactive unlock session.
//!
//! `select_backend -> connect -> list_inventory -> offer_unlock (per record)`.
//! Everything runs sequentially on the caller's task; the only state carried
//! across records is the backend handle.

mod lister;
mod selector;
mod unlocker;

pub use lister::list_inventory;
pub use selector::{select_backend, PresetParams, PROVIDER_PROMPT};
pub use unlocker::offer_unlock;

use std::fmt::Display;
use std::future::Future;
use std::io::Write;

use lockcheck_core::format::format_summary;
use lockcheck_core::{BackendConfig, LockBackend, SessionError, UnlockSummary};
use tracing::info;

use crate::prelude::*;
use crate::prompt::Prompter;

/// Runs a whole session: select, connect, list, then offer each lock.
///
/// `connect` is only called once a valid backend and all its parameters are
/// known.
pub async fn run_session<W, C, F>(
    prompter: &mut dyn Prompter,
    out: &mut W,
    presets: &PresetParams,
    connect: C,
) -> Result<UnlockSummary, SessionError>
where
    W: Write,
    C: FnOnce(BackendConfig) -> F,
    F: Future<Output = lockcheck_core::Result<Box<dyn LockBackend>>>,
{
    let config = select_backend(prompter, presets)?;

    info!(backend = %config.kind(), store = %config.target_display(), "connecting");
    let backend = connect(config).await?;

    unlock_pass(backend.as_ref(), prompter, out).await
}

/// Lists the backend's locks and offers each one for deletion, in listing
/// order.
pub async fn unlock_pass<W: Write>(
    backend: &dyn LockBackend,
    prompter: &mut dyn Prompter,
    out: &mut W,
) -> Result<UnlockSummary, SessionError> {
    let records = list_inventory(backend, out).await?;
    let mut summary = UnlockSummary::new(records.len());

    if records.is_empty() {
        return Ok(summary);
    }

    for record in &records {
        let outcome = offer_unlock(backend, record, prompter, out).await?;
        summary.record(&outcome);
    }

    emit(out, p_b(&format_summary(&summary)))?;
    Ok(summary)
}

pub(crate) fn emit<W: Write>(out: &mut W, line: impl Display) -> Result<(), SessionError> {
    writeln!(out, "{}", line).map_err(|e| SessionError::Output(e.to_string()))
}
