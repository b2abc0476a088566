//! Resolution of wildcard-capable target-name patterns into the concrete
//! resource type names registered in the account/region.

use std::collections::BTreeSet;

use async_trait::async_trait;
use aws_sdk_cloudformation::error::DisplayErrorContext;
use aws_sdk_cloudformation::types::{DeprecatedStatus, RegistryType, Visibility};
use aws_sdk_cloudformation::Client;
use tracing::debug;

use crate::error::{CfnHookError, Result};

use super::{contains_wildcard, wildcard_match};

/// Turns a list of target-name patterns (possibly containing wildcards) into
/// the concrete set of matching resource type names.
#[async_trait]
pub trait TypeNameResolver: Send + Sync {
    async fn resolve_type_names(&self, patterns: &[String]) -> Result<Vec<String>>;
}

/// Resolver backed by the account's type registry. Patterns without wildcards
/// pass through unchanged; wildcard patterns are matched against the resource
/// types returned by paginated ListTypes calls.
pub struct RegistryTypeResolver<'a> {
    client: &'a Client,
}

impl<'a> RegistryTypeResolver<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List the names of all live resource types visible to the account,
    /// public and private.
    async fn list_resource_type_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for visibility in [Visibility::Public, Visibility::Private] {
            debug!(?visibility, "Calling ListTypes for registered resource types");
            let mut pages = self
                .client
                .list_types()
                .r#type(RegistryType::Resource)
                .visibility(visibility)
                .deprecated_status(DeprecatedStatus::Live)
                .into_paginator()
                .send();
            while let Some(page) = pages.next().await {
                let page = page.map_err(|err| CfnHookError::Downstream {
                    message: DisplayErrorContext(&err).to_string(),
                })?;
                for summary in page.type_summaries() {
                    if let Some(name) = summary.type_name() {
                        names.push(name.to_string());
                    }
                }
            }
        }
        Ok(names)
    }
}

#[async_trait]
impl TypeNameResolver for RegistryTypeResolver<'_> {
    async fn resolve_type_names(&self, patterns: &[String]) -> Result<Vec<String>> {
        let mut resolved = BTreeSet::new();
        let mut wildcards = Vec::new();

        for pattern in patterns {
            if contains_wildcard(pattern) {
                wildcards.push(pattern.as_str());
            } else {
                resolved.insert(pattern.clone());
            }
        }

        if !wildcards.is_empty() {
            for name in self.list_resource_type_names().await? {
                if wildcards.iter().any(|pattern| wildcard_match(&name, pattern)) {
                    resolved.insert(name);
                }
            }
        }

        Ok(resolved.into_iter().collect())
    }
}
