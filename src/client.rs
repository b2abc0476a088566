//! AWS session and CloudFormation client construction.

use aws_config::{BehaviorVersion, Region};
use aws_sdk_cloudformation::Client;

/// Build a CloudFormation client from the command-line connection options.
/// Anything not given falls back to the standard provider chain (environment,
/// shared config, instance metadata).
pub async fn build_client(
    region: Option<&str>,
    profile: Option<&str>,
    endpoint_url: Option<&str>,
) -> Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = region {
        loader = loader.region(Region::new(region.to_string()));
    }
    if let Some(profile) = profile {
        loader = loader.profile_name(profile);
    }
    if let Some(endpoint_url) = endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }
    Client::new(&loader.load().await)
}
