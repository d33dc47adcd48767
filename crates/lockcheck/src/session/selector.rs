//! Backend selection and connection parameter collection.

use lockcheck_core::config::DEFAULT_AWS_REGION;
use lockcheck_core::{
    AzureBlobConfig, BackendConfig, BackendKind, DynamoDbConfig, SessionError,
};
use tracing::debug;

use crate::prompt::Prompter;

pub const PROVIDER_PROMPT: &str = "Which cloud provider are you using? (aws/azure)";
pub const REGION_PROMPT: &str = "AWS region";
pub const TABLE_PROMPT: &str = "DynamoDB table name for locking";
pub const ACCOUNT_NAME_PROMPT: &str = "Azure storage account name";
pub const ACCOUNT_KEY_PROMPT: &str = "Azure storage account key";
pub const CONTAINER_PROMPT: &str = "Azure Blob container name for locking";

/// Values supplied before the session starts, from flags or the environment.
///
/// Blank values count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetParams {
    pub backend: Option<String>,
    pub region: Option<String>,
    pub table_name: Option<String>,
    pub endpoint_url: Option<String>,
    pub account_name: Option<String>,
    pub account_key: Option<String>,
    pub container_name: Option<String>,
}

/// Resolves the backend choice, then its connection parameters.
///
/// An unknown backend fails before any parameter is asked for.
pub fn select_backend(
    prompter: &mut dyn Prompter,
    presets: &PresetParams,
) -> Result<BackendConfig, SessionError> {
    let choice = match preset(&presets.backend) {
        Some(choice) => choice,
        None => prompter.input(PROVIDER_PROMPT)?,
    };
    let kind: BackendKind = choice.parse()?;

    debug!(backend = %kind, "backend selected");

    match kind {
        BackendKind::Aws => dynamodb_config(prompter, presets).map(BackendConfig::DynamoDb),
        BackendKind::Azure => azure_config(prompter, presets).map(BackendConfig::AzureBlob),
    }
}

fn dynamodb_config(
    prompter: &mut dyn Prompter,
    presets: &PresetParams,
) -> Result<DynamoDbConfig, SessionError> {
    let region = match preset(&presets.region) {
        Some(region) => region,
        None => {
            let answer = prompter.input(REGION_PROMPT)?;
            non_blank(answer).unwrap_or_else(|| DEFAULT_AWS_REGION.to_string())
        }
    };
    let table_name = required(prompter, &presets.table_name, TABLE_PROMPT, "table name", false)?;

    Ok(DynamoDbConfig {
        region,
        table_name,
        endpoint_url: preset(&presets.endpoint_url),
    })
}

fn azure_config(
    prompter: &mut dyn Prompter,
    presets: &PresetParams,
) -> Result<AzureBlobConfig, SessionError> {
    let account_name = required(
        prompter,
        &presets.account_name,
        ACCOUNT_NAME_PROMPT,
        "storage account name",
        false,
    )?;
    let account_key = required(
        prompter,
        &presets.account_key,
        ACCOUNT_KEY_PROMPT,
        "storage account key",
        true,
    )?;
    let container_name = required(
        prompter,
        &presets.container_name,
        CONTAINER_PROMPT,
        "container name",
        false,
    )?;

    Ok(AzureBlobConfig {
        account_name,
        account_key,
        container_name,
    })
}

fn required(
    prompter: &mut dyn Prompter,
    value: &Option<String>,
    prompt: &str,
    name: &'static str,
    secret: bool,
) -> Result<String, SessionError> {
    if let Some(value) = preset(value) {
        return Ok(value);
    }

    let answer = if secret {
        prompter.secret(prompt)?
    } else {
        prompter.input(prompt)?
    };

    non_blank(answer).ok_or(SessionError::MissingParameter(name))
}

fn preset(value: &Option<String>) -> Option<String> {
    value.clone().and_then(non_blank)
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;

    #[test]
    fn test_aws_prompts_in_order() {
        let mut prompter = ScriptedPrompter::new(["AWS", "eu-west-1", "terraform-locks"]);

        let config = select_backend(&mut prompter, &PresetParams::default()).unwrap();

        assert_eq!(
            config,
            BackendConfig::DynamoDb(DynamoDbConfig {
                region: "eu-west-1".to_string(),
                table_name: "terraform-locks".to_string(),
                endpoint_url: None,
            })
        );
        assert_eq!(
            prompter.asked(),
            [PROVIDER_PROMPT, REGION_PROMPT, TABLE_PROMPT]
        );
    }

    #[test]
    fn test_blank_region_uses_default() {
        let mut prompter = ScriptedPrompter::new(["aws", "", "locks"]);

        let config = select_backend(&mut prompter, &PresetParams::default()).unwrap();

        match config {
            BackendConfig::DynamoDb(config) => assert_eq!(config.region, DEFAULT_AWS_REGION),
            other => panic!("unexpected config: {other:?}"),
        }
    }

    #[test]
    fn test_azure_prompts_in_order() {
        let mut prompter =
            ScriptedPrompter::new(["azure", "tfstateprod", "c2VjcmV0LWtleQ==", "tfstate"]);

        let config = select_backend(&mut prompter, &PresetParams::default()).unwrap();

        assert_eq!(
            config,
            BackendConfig::AzureBlob(AzureBlobConfig {
                account_name: "tfstateprod".to_string(),
                account_key: "c2VjcmV0LWtleQ==".to_string(),
                container_name: "tfstate".to_string(),
            })
        );
        assert_eq!(prompter.asked().len(), 4);
    }

    #[test]
    fn test_invalid_selection_asks_nothing_else() {
        let mut prompter = ScriptedPrompter::new(["gcp", "us-central1", "locks"]);

        let result = select_backend(&mut prompter, &PresetParams::default());

        assert_eq!(
            result,
            Err(SessionError::InvalidSelection("gcp".to_string()))
        );
        assert_eq!(prompter.asked(), [PROVIDER_PROMPT]);
        assert_eq!(prompter.remaining(), 2);
    }

    #[test]
    fn test_presets_skip_prompts() {
        let presets = PresetParams {
            backend: Some("aws".to_string()),
            region: Some("ap-southeast-2".to_string()),
            table_name: Some("locks".to_string()),
            endpoint_url: Some("http://localhost:8000".to_string()),
            ..PresetParams::default()
        };
        let mut prompter = ScriptedPrompter::new(Vec::<String>::new());

        let config = select_backend(&mut prompter, &presets).unwrap();

        assert!(prompter.asked().is_empty());
        assert_eq!(
            config,
            BackendConfig::DynamoDb(DynamoDbConfig {
                region: "ap-southeast-2".to_string(),
                table_name: "locks".to_string(),
                endpoint_url: Some("http://localhost:8000".to_string()),
            })
        );
    }

    #[test]
    fn test_preset_backend_is_validated() {
        let presets = PresetParams {
            backend: Some("consul".to_string()),
            ..PresetParams::default()
        };
        let mut prompter = ScriptedPrompter::new(Vec::<String>::new());

        let result = select_backend(&mut prompter, &presets);

        assert!(matches!(result, Err(SessionError::InvalidSelection(_))));
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn test_blank_preset_falls_back_to_prompt() {
        let presets = PresetParams {
            backend: Some("azure".to_string()),
            account_name: Some("  ".to_string()),
            account_key: Some("key".to_string()),
            container_name: Some("tfstate".to_string()),
            ..PresetParams::default()
        };
        let mut prompter = ScriptedPrompter::new(["tfstateprod"]);

        select_backend(&mut prompter, &presets).unwrap();

        assert_eq!(prompter.asked(), [ACCOUNT_NAME_PROMPT]);
    }

    #[test]
    fn test_missing_required_parameter() {
        let mut prompter = ScriptedPrompter::new(["aws", "eu-west-1", "   "]);

        let result = select_backend(&mut prompter, &PresetParams::default());

        assert_eq!(result, Err(SessionError::MissingParameter("table name")));
    }
}
