use aws_sdk_cloudformation::Client;

use crate::config::HookConfiguration;
use crate::error::Result;
use crate::project::ProjectSettings;
use crate::registry::{self, HookTypeData};
use crate::targets::report::build_target_report;
use crate::targets::resolver::RegistryTypeResolver;

const TAB_WIDTH: usize = 2;

/// Run the `describe` subcommand: print the hook's selected version,
/// configuration, resolved targets, and testing status.
pub async fn run(client: &Client, version_id: Option<&str>) -> Result<()> {
    let settings = ProjectSettings::load()?;
    let type_name = &settings.type_name;

    if version_id.is_none() {
        println!("\nNo version specified, using default version");
    }

    let hook_data = registry::describe_hook_type(client, type_name, None).await?;
    let version_id = match version_id {
        Some(version_id) => registry::pad_version_id(version_id),
        None => hook_data.default_version_id.clone(),
    };
    println!("\nSelected {type_name} version {version_id}");

    let versioned_hook_data =
        registry::describe_hook_type(client, type_name, Some(&version_id)).await?;
    let hook_configuration = registry::hook_type_configuration(client, type_name, "default").await?;

    let resolver = RegistryTypeResolver::new(client);
    let target_report =
        build_target_report(&resolver, &versioned_hook_data.schema, &hook_configuration).await?;

    let summary = describe_summary(
        &hook_data,
        &versioned_hook_data,
        &hook_configuration,
        &version_id,
        &target_report,
    );
    println!("{}", expand_tabs(&summary, TAB_WIDTH));
    if versioned_hook_data.type_tests_status != "PASSED" {
        println!(" Warning: {}", versioned_hook_data.type_tests_status_description);
    }
    Ok(())
}

/// Assemble the full describe output. Indentation uses tabs; the caller
/// expands them for display.
pub fn describe_summary(
    hook_data: &HookTypeData,
    versioned_hook_data: &HookTypeData,
    configuration: &HookConfiguration,
    version_id: &str,
    target_report: &str,
) -> String {
    let current_configuration = format!(
        "\nCurrent configuration (only applies to default version):\n\
         \tDefault version: {}\n\
         \tConfigured behavior:\n\
         \t\tFailure mode: {}\n\
         \t\tTarget stacks: {}\n\
         {}\n\t{}\n",
        hook_data.default_version_id,
        configuration.failure_mode,
        configuration.target_stacks,
        configuration.stack_filters_summary(),
        configuration.properties_table(),
    );

    format!(
        "\nDescription: {}\n\
         Version {version_id} Created at: {}\n\
         Version {version_id} Last updated at: {}\n\
         {current_configuration}\n\
         {target_report}\n\
         Testing status: {}",
        versioned_hook_data.description,
        versioned_hook_data.time_created,
        versioned_hook_data.last_updated,
        versioned_hook_data.type_tests_status,
    )
}

/// Tabs in the summary only ever appear as leading indentation, so a plain
/// replacement is equivalent to column-aware expansion.
fn expand_tabs(text: &str, width: usize) -> String {
    text.replace('\t', &" ".repeat(width))
}
