use std::path::Path;

use aws_sdk_cloudformation::Client;

use crate::error::{CfnHookError, Result};
use crate::project::ProjectSettings;
use crate::registry;

/// Run the `configure` subcommand: push a local configuration JSON file to
/// the registered hook and print the resulting configuration ARN.
pub async fn run(client: &Client, configuration_path: &str) -> Result<()> {
    let settings = ProjectSettings::load()?;

    let path = Path::new(configuration_path);
    let configuration_json =
        std::fs::read_to_string(path).map_err(|_| CfnHookError::InvalidProject {
            reason: format!("Configuration file {} not found.", path.display()),
        })?;

    let configuration_arn =
        registry::set_type_configuration(client, &settings.type_name, &configuration_json).await?;
    println!("ConfigurationArn: {configuration_arn}");
    Ok(())
}
