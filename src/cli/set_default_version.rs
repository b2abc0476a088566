use aws_sdk_cloudformation::Client;

use crate::error::Result;
use crate::project::ProjectSettings;
use crate::registry;

/// Run the `set-default-version` subcommand.
pub async fn run(client: &Client, version_id: &str) -> Result<()> {
    let settings = ProjectSettings::load()?;
    let version_id = registry::pad_version_id(version_id);

    registry::set_type_default_version(client, &settings.type_name, &version_id).await
}
