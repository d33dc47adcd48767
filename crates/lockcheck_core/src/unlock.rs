//! Per-record unlock decisions (Functional Core).
//!
//! Each listed record moves through
//! `Listed -> {Confirmed -> Deleted | DeleteFailed} | Declined`.
//! Every branch is terminal: a record is never prompted twice.

use crate::error::BackendError;

/// The operator's answer to an unlock prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl Confirmation {
    /// Only `y` and `Y` confirm. Any other answer, including an empty one,
    /// declines. The line terminator and surrounding whitespace are ignored.
    pub fn parse(answer: &str) -> Self {
        match answer.trim() {
            "y" | "Y" => Confirmation::Confirmed,
            _ => Confirmation::Declined,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, Confirmation::Confirmed)
    }
}

/// Terminal state of one record after the unlock pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnlockOutcome {
    Declined,
    Deleted,
    DeleteFailed(BackendError),
}

impl UnlockOutcome {
    /// Resolves a confirmed record from the result of its deletion.
    pub fn from_delete(result: crate::error::Result<()>) -> Self {
        match result {
            Ok(()) => UnlockOutcome::Deleted,
            Err(err) => UnlockOutcome::DeleteFailed(err),
        }
    }
}

/// Tally of one unlock pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnlockSummary {
    pub listed: usize,
    pub deleted: usize,
    pub declined: usize,
    pub failed: usize,
}

impl UnlockSummary {
    /// Starts a tally for `listed` records.
    pub fn new(listed: usize) -> Self {
        Self {
            listed,
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: &UnlockOutcome) {
        match outcome {
            UnlockOutcome::Declined => self.declined += 1,
            UnlockOutcome::Deleted => self.deleted += 1,
            UnlockOutcome::DeleteFailed(_) => self.failed += 1,
        }
    }

    /// Number of records that reached a terminal state.
    pub fn offered(&self) -> usize {
        self.deleted + self.declined + self.failed
    }
}
