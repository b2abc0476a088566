//! The `enable-lambda-invoker` and `enable-lambda-function-invoker`
//! subcommands: activate the AWSSamples Lambda invoker hook and point it at
//! a Lambda function.

use std::io::Write;

use aws_sdk_cloudformation::Client;
use serde_json::{json, Map};

use crate::config::{
    CloudFormationConfiguration, FailureMode, HookConfiguration, TargetStacks, TypeConfiguration,
};
use crate::error::{CfnHookError, Result};
use crate::registry;
use crate::targets::{Action, InvocationPoint, TargetFilters};

pub const EXPERIMENTAL_ENV_VAR: &str = "CFN_CLI_HOOKS_EXPERIMENTAL";

/// Run the legacy `enable-lambda-invoker` subcommand. Targets all stacks and
/// all resources, and finishes silently.
pub async fn run_invoker(
    client: &Client,
    lambda_arn: &str,
    failure_mode: Option<FailureMode>,
    execution_role: Option<&str>,
    alias: Option<&str>,
) -> Result<()> {
    let failure_mode = failure_mode.unwrap_or(FailureMode::Fail);

    let type_arn = registry::activate_lambda_invoker(client, execution_role, alias).await?;
    let configuration_json = build_configuration_json(lambda_arn, failure_mode, None)?;
    registry::set_type_configuration_arn(client, &type_arn, &configuration_json).await?;
    Ok(())
}

/// Run the `enable-lambda-function-invoker` subcommand. Experimental: gated
/// behind an environment opt-in, and confirms interactively before targeting
/// every resource type in the account.
pub async fn run_function_invoker(
    client: &Client,
    lambda_function_arn: &str,
    execution_role_arn: &str,
    failure_mode: Option<FailureMode>,
    alias: Option<&str>,
    include_targets: Option<&str>,
) -> Result<()> {
    ensure_experimental_enabled()?;
    if include_targets.is_none() {
        confirm_target_all()?;
    }
    let failure_mode = failure_mode.unwrap_or(FailureMode::Fail);

    let type_arn =
        registry::activate_lambda_invoker(client, Some(execution_role_arn), alias).await?;
    let configuration_json =
        build_configuration_json(lambda_function_arn, failure_mode, include_targets)?;
    registry::set_type_configuration_arn(client, &type_arn, &configuration_json).await?;

    println!("{}", success_message(include_targets.unwrap_or("ALL"), failure_mode));
    Ok(())
}

/// Build the type configuration JSON for the Lambda invoker hook. With
/// `include_targets` (comma-separated, wildcards allowed) the configuration
/// carries target filters limiting the hook to CREATE/UPDATE at
/// PRE_PROVISION for the named types.
pub fn build_configuration_json(
    lambda_function_arn: &str,
    failure_mode: FailureMode,
    include_targets: Option<&str>,
) -> Result<String> {
    let mut properties = Map::new();
    properties.insert("LambdaFunctions".to_string(), json!([lambda_function_arn]));

    let target_filters = include_targets.map(|targets| TargetFilters {
        targets: None,
        target_names: Some(targets.split(',').map(|t| t.trim().to_string()).collect()),
        actions: Some(vec![Action::Create, Action::Update]),
        invocation_points: Some(vec![InvocationPoint::PreProvision]),
    });

    let configuration = TypeConfiguration {
        cloud_formation_configuration: CloudFormationConfiguration {
            hook_configuration: HookConfiguration {
                failure_mode,
                target_stacks: TargetStacks::All,
                properties: Some(properties),
                stack_filters: None,
                target_filters,
            },
        },
    };
    Ok(serde_json::to_string(&configuration)?)
}

pub fn success_message(targets: &str, failure_mode: FailureMode) -> String {
    format!(
        "Success: {} will now be invoked for CloudFormation deployments for {targets} \
         resources in {failure_mode} mode.",
        registry::LAMBDA_INVOKER_TYPE_NAME
    )
}

fn ensure_experimental_enabled() -> Result<()> {
    match std::env::var(EXPERIMENTAL_ENV_VAR) {
        Ok(value) if value == "enabled" => Ok(()),
        _ => Err(CfnHookError::Aborted {
            reason: format!(
                "enable-lambda-function-invoker is experimental. Set \
                 {EXPERIMENTAL_ENV_VAR}=enabled to opt in."
            ),
        }),
    }
}

/// Without `--include-targets` the hook fires for every resource type in
/// every stack, so make the user say so.
fn confirm_target_all() -> Result<()> {
    print!(
        "No --include-targets specified; the hook will be invoked for ALL resource types. \
         Continue? [y/N] "
    );
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    match answer.trim() {
        "y" | "Y" => Ok(()),
        _ => Err(CfnHookError::Aborted {
            reason: "aborted by user".to_string(),
        }),
    }
}
