pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod project;
pub mod registry;
pub mod targets;

use clap::{Args, Subcommand};

pub use config::{FailureMode, HookConfiguration, TargetStacks, TypeConfiguration};
pub use error::{CfnHookError, Result};
pub use project::ProjectSettings;
pub use targets::{Action, InvocationPoint, TargetCandidate, TargetFilters};

/// Connection options accepted by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct AwsConnectionArgs {
    /// AWS profile to use.
    #[arg(long)]
    pub profile: Option<String>,

    /// CloudFormation endpoint to use.
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// AWS region to submit the type.
    #[arg(long)]
    pub region: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Describe the hook registered in your AWS account: configuration,
    /// properties, stack filters, and resolved targets.
    Describe {
        /// Hook version number. Defaults to the registered default version.
        #[arg(long)]
        version_id: Option<String>,

        #[command(flatten)]
        aws: AwsConnectionArgs,
    },

    /// Set the type configuration of the registered hook from a local JSON file.
    Configure {
        /// Filepath to the CloudFormation configuration JSON to use for the hook.
        #[arg(long)]
        configuration_path: String,

        #[command(flatten)]
        aws: AwsConnectionArgs,
    },

    /// Set the default version of the registered hook.
    SetDefaultVersion {
        /// Hook version number to use as default.
        #[arg(long)]
        version_id: String,

        #[command(flatten)]
        aws: AwsConnectionArgs,
    },

    /// Activate the AWSSamples Lambda invoker hook for all stacks.
    EnableLambdaInvoker {
        /// Lambda function ARN to use for the hook.
        #[arg(long)]
        lambda_arn: String,

        /// Failure mode to configure for the hook. Default is FAIL.
        #[arg(long)]
        failure_mode: Option<FailureMode>,

        /// ARN of the IAM role to use for hook execution.
        #[arg(long)]
        execution_role: Option<String>,

        /// Alias to use for AWSSamples::LambdaFunctionInvoker::Hook.
        #[arg(long)]
        alias: Option<String>,

        #[command(flatten)]
        aws: AwsConnectionArgs,
    },

    /// Activate the AWSSamples Lambda function invoker hook (experimental,
    /// requires CFN_CLI_HOOKS_EXPERIMENTAL=enabled).
    EnableLambdaFunctionInvoker {
        /// Lambda function ARN to use for the hook.
        #[arg(long)]
        lambda_function_arn: String,

        /// ARN of the IAM role to use for hook execution.
        #[arg(long)]
        execution_role_arn: String,

        /// Failure mode to configure for the hook. Default is FAIL.
        #[arg(long)]
        failure_mode: Option<FailureMode>,

        /// Alias to use for AWSSamples::LambdaFunctionInvoker::Hook.
        #[arg(long)]
        alias: Option<String>,

        /// Comma-separated resource type names (wildcards allowed) the hook
        /// should target. Without this the hook targets ALL resources.
        #[arg(long)]
        include_targets: Option<String>,

        #[command(flatten)]
        aws: AwsConnectionArgs,
    },
}
