//! lockcheck - Inspect and clear stale Terraform/Terragrunt state locks.

pub mod backends;
pub mod cli;
pub mod prelude;
pub mod prompt;
pub mod session;

pub use cli::Cli;
pub use prompt::{Prompter, TerminalPrompter};
#[cfg(any(test, feature = "inmemory"))]
pub use prompt::ScriptedPrompter;
pub use session::{run_session, unlock_pass, PresetParams};
