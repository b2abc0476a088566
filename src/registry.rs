//! Thin wrappers over the CloudFormation registry control-plane calls.
//!
//! Each wrapper issues one blocking call, maps the type-not-found family of
//! failures to a descriptive downstream error, and wraps everything else in
//! the same downstream kind with the SDK's rendered error context.

use aws_sdk_cloudformation::error::DisplayErrorContext;
use aws_sdk_cloudformation::types::{RegistryType, ThirdPartyType, TypeConfigurationIdentifier};
use aws_sdk_cloudformation::Client;
use aws_smithy_types::date_time::Format;
use tracing::debug;

use crate::config::{HookConfiguration, TypeConfiguration};
use crate::error::{CfnHookError, Result};

pub const LAMBDA_INVOKER_TYPE_NAME: &str = "AWSSamples::LambdaFunctionInvoker::Hook";
pub const LAMBDA_INVOKER_PUBLISHER_ID: &str = "096debcd443a84c983955f8f8476c221b2b08d8b";

/// The fields of a DescribeType response the describe command renders.
#[derive(Debug, Clone, Default)]
pub struct HookTypeData {
    pub default_version_id: String,
    pub description: String,
    pub schema: String,
    pub time_created: String,
    pub last_updated: String,
    pub type_tests_status: String,
    pub type_tests_status_description: String,
}

/// Version ids are stored zero-padded to eight characters.
pub fn pad_version_id(version_id: &str) -> String {
    format!("{version_id:0>8}")
}

/// DescribeType for a hook, optionally pinned to a version.
pub async fn describe_hook_type(
    client: &Client,
    type_name: &str,
    version_id: Option<&str>,
) -> Result<HookTypeData> {
    match version_id {
        None => debug!(type_name, "Calling DescribeType without version id to get default version id"),
        Some(version_id) => debug!(type_name, version_id, "Calling DescribeType"),
    }

    let result = client
        .describe_type()
        .type_name(type_name)
        .r#type(RegistryType::Hook)
        .set_version_id(version_id.map(String::from))
        .send()
        .await;

    let output = match result {
        Ok(output) => output,
        Err(err) => {
            if matches!(err.as_service_error(), Some(e) if e.is_type_not_found_exception()) {
                let message = match version_id {
                    None => "Describing type resulted in TypeNotFoundException. This type does \
                             not seem to exist in your account in this region. Have you \
                             registered this hook?"
                        .to_string(),
                    Some(version_id) => format!(
                        "Describing type with version id {version_id} resulted in \
                         TypeNotFoundException. This specific version does not seem to exist \
                         in your account in this region."
                    ),
                };
                println!("\n{message}");
                return Err(CfnHookError::Downstream { message });
            }
            return Err(CfnHookError::Downstream {
                message: DisplayErrorContext(&err).to_string(),
            });
        }
    };

    Ok(HookTypeData {
        default_version_id: output.default_version_id().unwrap_or_default().to_string(),
        description: output.description().unwrap_or_default().to_string(),
        schema: output.schema().unwrap_or_default().to_string(),
        time_created: format_timestamp(output.time_created()),
        last_updated: format_timestamp(output.last_updated()),
        type_tests_status: output
            .type_tests_status()
            .map(|status| status.as_str().to_string())
            .unwrap_or_default(),
        type_tests_status_description: output
            .type_tests_status_description()
            .unwrap_or_default()
            .to_string(),
    })
}

fn format_timestamp(timestamp: Option<&aws_smithy_types::DateTime>) -> String {
    timestamp
        .and_then(|t| t.fmt(Format::DateTime).ok())
        .unwrap_or_default()
}

/// Fetch the hook's type configuration via BatchDescribeTypeConfigurations.
/// An account that never had a configuration set gets the substituted
/// default (WARN / NONE).
pub async fn hook_type_configuration(
    client: &Client,
    type_name: &str,
    alias: &str,
) -> Result<HookConfiguration> {
    debug!(type_name, alias, "Calling BatchDescribeTypeConfigurations");

    let identifier = TypeConfigurationIdentifier::builder()
        .r#type(ThirdPartyType::Hook)
        .type_name(type_name)
        .type_configuration_alias(alias)
        .build();

    let output = client
        .batch_describe_type_configurations()
        .type_configuration_identifiers(identifier)
        .send()
        .await
        .map_err(|err| CfnHookError::Downstream {
            message: DisplayErrorContext(&err).to_string(),
        })?;

    if output
        .errors()
        .iter()
        .any(|e| e.error_code() == Some("TypeConfigurationNotFoundException"))
    {
        let message = "Describing type configuration resulted in \
                       TypeConfigurationNotFoundException. Have you set a type configuration \
                       for this hook?"
            .to_string();
        println!("\n{message}");
        return Err(CfnHookError::Downstream { message });
    }

    match output.type_configurations().first() {
        Some(details) => {
            debug!("Successful response from BatchDescribeTypeConfigurations");
            // The nested hook configuration arrives as a JSON string.
            let document: TypeConfiguration =
                serde_json::from_str(details.configuration().unwrap_or("{}"))?;
            Ok(document.cloud_formation_configuration.hook_configuration)
        }
        None => {
            debug!(
                "No type configurations found; an initial type configuration was likely \
                 never set. Using a substituted default type configuration"
            );
            Ok(HookConfiguration::default_substitute())
        }
    }
}

/// SetTypeConfiguration for a hook addressed by type name. Returns the
/// configuration ARN.
pub async fn set_type_configuration(
    client: &Client,
    type_name: &str,
    configuration_json: &str,
) -> Result<String> {
    debug!(type_name, "Calling SetTypeConfiguration");
    let result = client
        .set_type_configuration()
        .type_name(type_name)
        .r#type(ThirdPartyType::Hook)
        .configuration(configuration_json)
        .send()
        .await;

    match result {
        Ok(output) => {
            debug!("Successful response from SetTypeConfiguration");
            Ok(output.configuration_arn().unwrap_or_default().to_string())
        }
        Err(err) => {
            if matches!(err.as_service_error(), Some(e) if e.is_type_not_found_exception()) {
                let message = "Setting type configuration resulted in TypeNotFoundException. \
                               Have you registered this hook first?"
                    .to_string();
                println!("\n{message}");
                return Err(CfnHookError::Downstream { message });
            }
            Err(CfnHookError::Downstream {
                message: DisplayErrorContext(&err).to_string(),
            })
        }
    }
}

/// SetTypeConfiguration for a hook addressed by type ARN. Returns the
/// configuration ARN.
pub async fn set_type_configuration_arn(
    client: &Client,
    type_arn: &str,
    configuration_json: &str,
) -> Result<String> {
    debug!(type_arn, "Calling SetTypeConfiguration");
    let result = client
        .set_type_configuration()
        .type_arn(type_arn)
        .configuration(configuration_json)
        .send()
        .await;

    match result {
        Ok(output) => {
            debug!("Successful response from SetTypeConfiguration");
            Ok(output.configuration_arn().unwrap_or_default().to_string())
        }
        Err(err) => {
            if matches!(err.as_service_error(), Some(e) if e.is_type_not_found_exception()) {
                let message = "Setting type configuration resulted in TypeNotFoundException. \
                               Have you registered this hook first?"
                    .to_string();
                println!("\n{message}");
                return Err(CfnHookError::Downstream { message });
            }
            Err(CfnHookError::Downstream {
                message: DisplayErrorContext(&err).to_string(),
            })
        }
    }
}

/// SetTypeDefaultVersion for a hook.
pub async fn set_type_default_version(
    client: &Client,
    type_name: &str,
    version_id: &str,
) -> Result<()> {
    debug!(type_name, version_id, "Calling SetTypeDefaultVersion");
    let result = client
        .set_type_default_version()
        .r#type(RegistryType::Hook)
        .type_name(type_name)
        .version_id(version_id)
        .send()
        .await;

    match result {
        Ok(_) => {
            debug!("Successful response from SetTypeDefaultVersion");
            Ok(())
        }
        Err(err) => {
            if matches!(err.as_service_error(), Some(e) if e.is_type_not_found_exception()) {
                let message = "Trying to set type default version resulted in \
                               TypeNotFoundException. You may need to register the hook first."
                    .to_string();
                println!("\n{message}");
                return Err(CfnHookError::Downstream { message });
            }
            Err(CfnHookError::Downstream {
                message: DisplayErrorContext(&err).to_string(),
            })
        }
    }
}

/// ActivateType for the AWSSamples Lambda function invoker hook. Returns the
/// activated type's ARN.
pub async fn activate_lambda_invoker(
    client: &Client,
    execution_role_arn: Option<&str>,
    alias: Option<&str>,
) -> Result<String> {
    debug!(
        execution_role_arn,
        alias, "Calling ActivateType for {LAMBDA_INVOKER_TYPE_NAME}"
    );
    let result = client
        .activate_type()
        .r#type(ThirdPartyType::Hook)
        .type_name(LAMBDA_INVOKER_TYPE_NAME)
        .publisher_id(LAMBDA_INVOKER_PUBLISHER_ID)
        .set_execution_role_arn(execution_role_arn.map(String::from))
        .set_type_name_alias(alias.map(String::from))
        .send()
        .await;

    match result {
        Ok(output) => {
            debug!("Successful response from ActivateType");
            Ok(output.arn().unwrap_or_default().to_string())
        }
        Err(err) => {
            if matches!(err.as_service_error(), Some(e) if e.is_type_not_found_exception()) {
                let message = "Setting type configuration resulted in TypeNotFoundException. \
                               Have you registered this hook first?"
                    .to_string();
                println!("\n{message}");
                return Err(CfnHookError::Downstream { message });
            }
            Err(CfnHookError::Downstream {
                message: DisplayErrorContext(&err).to_string(),
            })
        }
    }
}
