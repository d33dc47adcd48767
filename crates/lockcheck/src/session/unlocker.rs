//! Interactive per-record unlock.

use std::io::Write;

use lockcheck_core::format::{format_delete_failed, format_deleted, format_unlock_prompt};
use lockcheck_core::{Confirmation, LockBackend, LockRecord, SessionError, UnlockOutcome};
use tracing::warn;

use super::emit;
use crate::prelude::*;
use crate::prompt::Prompter;

/// Asks whether `record` should be deleted and acts on the answer.
///
/// A failed deletion is reported and returned as an outcome, never as an
/// error. An answer that cannot be read counts as "no". Only a failure to
/// write output ends the session.
pub async fn offer_unlock<W: Write>(
    backend: &dyn LockBackend,
    record: &LockRecord,
    prompter: &mut dyn Prompter,
    out: &mut W,
) -> Result<UnlockOutcome, SessionError> {
    let label = backend.identity_label();
    let answer = match prompter.input(&format_unlock_prompt(label, record)) {
        Ok(answer) => answer,
        Err(err) => {
            warn!(identity = %record.identity(), error = %err, "could not read answer, keeping lock");
            return Ok(UnlockOutcome::Declined);
        }
    };

    if !Confirmation::parse(&answer).is_confirmed() {
        return Ok(UnlockOutcome::Declined);
    }

    let outcome = UnlockOutcome::from_delete(backend.delete(record.identity()).await);

    match &outcome {
        UnlockOutcome::Deleted => {
            emit(out, p_g(&format_deleted(label, record.identity())))?;
        }
        UnlockOutcome::DeleteFailed(err) => {
            warn!(identity = %record.identity(), error = %err, "failed to delete lock");
            emit(
                out,
                p_r(&format_delete_failed(label, record.identity(), err)),
            )?;
        }
        UnlockOutcome::Declined => {}
    }

    Ok(outcome)
}
