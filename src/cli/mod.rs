pub mod configure;
pub mod describe;
pub mod enable_lambda;
pub mod set_default_version;

use crate::client;
use crate::error::Result;
use crate::AwsConnectionArgs;

/// Dispatch a CLI command. Builds the CloudFormation client once and hands it
/// to the command handler.
pub async fn dispatch(command: crate::Commands) -> Result<()> {
    match command {
        crate::Commands::Describe { version_id, aws } => {
            let client = connect(&aws).await;
            describe::run(&client, version_id.as_deref()).await
        }
        crate::Commands::Configure {
            configuration_path,
            aws,
        } => {
            let client = connect(&aws).await;
            configure::run(&client, &configuration_path).await
        }
        crate::Commands::SetDefaultVersion { version_id, aws } => {
            let client = connect(&aws).await;
            set_default_version::run(&client, &version_id).await
        }
        crate::Commands::EnableLambdaInvoker {
            lambda_arn,
            failure_mode,
            execution_role,
            alias,
            aws,
        } => {
            let client = connect(&aws).await;
            enable_lambda::run_invoker(
                &client,
                &lambda_arn,
                failure_mode,
                execution_role.as_deref(),
                alias.as_deref(),
            )
            .await
        }
        crate::Commands::EnableLambdaFunctionInvoker {
            lambda_function_arn,
            execution_role_arn,
            failure_mode,
            alias,
            include_targets,
            aws,
        } => {
            let client = connect(&aws).await;
            enable_lambda::run_function_invoker(
                &client,
                &lambda_function_arn,
                &execution_role_arn,
                failure_mode,
                alias.as_deref(),
                include_targets.as_deref(),
            )
            .await
        }
    }
}

async fn connect(aws: &AwsConnectionArgs) -> aws_sdk_cloudformation::Client {
    client::build_client(
        aws.region.as_deref(),
        aws.profile.as_deref(),
        aws.endpoint_url.as_deref(),
    )
    .await
}
