//! Tests for the configuration document the enable-lambda-* subcommands
//! submit to SetTypeConfiguration.

use cfn_hook::cli::enable_lambda::{build_configuration_json, success_message};
use cfn_hook::config::FailureMode;
use serde_json::{json, Value};

const LAMBDA_ARN: &str = "arn:aws:lambda:us-east-2:123456789012:function:my-function:1";

fn hook_configuration(document: &str) -> Value {
    let parsed: Value = serde_json::from_str(document).unwrap();
    parsed["CloudFormationConfiguration"]["HookConfiguration"].clone()
}

#[test]
fn without_include_targets() {
    let document = build_configuration_json(LAMBDA_ARN, FailureMode::Fail, None).unwrap();
    let config = hook_configuration(&document);

    assert_eq!(config["FailureMode"], "FAIL");
    assert_eq!(config["TargetStacks"], "ALL");
    assert_eq!(config["Properties"]["LambdaFunctions"], json!([LAMBDA_ARN]));
    assert!(config.get("TargetFilters").is_none());
    assert!(config.get("StackFilters").is_none());
}

#[test]
fn warn_failure_mode_round_trips() {
    let document = build_configuration_json(LAMBDA_ARN, FailureMode::Warn, None).unwrap();
    assert_eq!(hook_configuration(&document)["FailureMode"], "WARN");
}

#[test]
fn include_targets_become_target_filters() {
    let document = build_configuration_json(
        LAMBDA_ARN,
        FailureMode::Fail,
        Some("AWS::Cloud*::*,AWS::DynamoDB::Table"),
    )
    .unwrap();
    let filters = hook_configuration(&document)["TargetFilters"].clone();

    assert_eq!(
        filters["TargetNames"],
        json!(["AWS::Cloud*::*", "AWS::DynamoDB::Table"])
    );
    assert_eq!(filters["Actions"], json!(["CREATE", "UPDATE"]));
    assert_eq!(filters["InvocationPoints"], json!(["PRE_PROVISION"]));
}

#[test]
fn single_include_target() {
    let document =
        build_configuration_json(LAMBDA_ARN, FailureMode::Fail, Some("AWS::S3::Bucket")).unwrap();
    let filters = hook_configuration(&document)["TargetFilters"].clone();
    assert_eq!(filters["TargetNames"], json!(["AWS::S3::Bucket"]));
}

#[test]
fn success_message_names_the_hook_targets_and_mode() {
    assert_eq!(
        success_message("ALL", FailureMode::Fail),
        "Success: AWSSamples::LambdaFunctionInvoker::Hook will now be invoked for \
         CloudFormation deployments for ALL resources in FAIL mode."
    );
    assert_eq!(
        success_message("AWS::S3::*", FailureMode::Warn),
        "Success: AWSSamples::LambdaFunctionInvoker::Hook will now be invoked for \
         CloudFormation deployments for AWS::S3::* resources in WARN mode."
    );
}

#[test]
fn include_targets_tolerate_spaces_around_commas() {
    let document = build_configuration_json(
        LAMBDA_ARN,
        FailureMode::Fail,
        Some("AWS::S3::* , AWS::SQS::Queue"),
    )
    .unwrap();
    let filters = hook_configuration(&document)["TargetFilters"].clone();
    assert_eq!(filters["TargetNames"], json!(["AWS::S3::*", "AWS::SQS::Queue"]));
}
