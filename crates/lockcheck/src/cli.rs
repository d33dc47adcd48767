//! CLI command definitions.

use clap::Parser;

use crate::session::PresetParams;

/// Inspect and clear stale Terraform/Terragrunt state locks.
#[derive(Debug, Parser)]
#[command(name = "lockcheck")]
#[command(version, about = "Inspect and clear stale Terraform/Terragrunt state locks")]
#[command(long_about = "Inspect and clear stale Terraform/Terragrunt state locks.

Lists every lock held in a DynamoDB lock table or an Azure Blob container and
asks, one lock at a time, whether it should be removed. Only an answer of
'y' or 'Y' deletes a lock.

Any value not given as a flag or environment variable is prompted for.

Environment variables:
  AWS_ENDPOINT_URL    - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_PROFILE         - AWS profile to use for credentials
  RUST_LOG            - Log filter (overrides --verbose)")]
pub struct Cli {
    /// Lock backend to inspect: 'aws' or 'azure'.
    #[arg(long, env = "LOCKCHECK_BACKEND", value_name = "aws|azure")]
    pub backend: Option<String>,

    /// AWS region of the lock table.
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// DynamoDB table holding the locks.
    #[arg(long, env = "LOCKCHECK_DYNAMODB_TABLE")]
    pub table: Option<String>,

    /// Custom DynamoDB endpoint.
    #[arg(long, env = "AWS_ENDPOINT_URL", value_name = "URL")]
    pub endpoint_url: Option<String>,

    /// Azure storage account name.
    #[arg(long, env = "AZURE_STORAGE_ACCOUNT_NAME")]
    pub account_name: Option<String>,

    /// Azure storage account key.
    #[arg(long, env = "AZURE_STORAGE_ACCOUNT_KEY", hide_env_values = true)]
    pub account_key: Option<String>,

    /// Azure Blob container holding the locks.
    #[arg(long, env = "LOCKCHECK_AZURE_CONTAINER")]
    pub container: Option<String>,

    /// Enable debug logging.
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Values supplied up front; the session prompts for the rest.
    pub fn presets(&self) -> PresetParams {
        PresetParams {
            backend: self.backend.clone(),
            region: self.region.clone(),
            table_name: self.table.clone(),
            endpoint_url: self.endpoint_url.clone(),
            account_name: self.account_name.clone(),
            account_key: self.account_key.clone(),
            container_name: self.container.clone(),
        }
    }
}
