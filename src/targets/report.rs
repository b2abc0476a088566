//! Builds the human-readable report of the resource types each hook handler
//! targets, from the registered schema and the hook's type configuration.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::HookConfiguration;
use crate::error::{CfnHookError, Result};

use super::resolver::TypeNameResolver;
use super::{matches_filters, Action, InvocationPoint, TargetCandidate};

/// Sentinel returned when no handler retains any target.
pub const NO_TARGETS_MESSAGE: &str =
    "Based on the schema and target filters, this hook has no targets.\n";

/// Handlers with more resolved targets than this are summarized as a count
/// instead of listed one per line.
const MAX_LISTED_TARGETS: usize = 5;

/// The `handlers` object of a registered hook schema. Handler blocks keep
/// the schema document's own order, so each entry is parsed individually.
#[derive(Debug, Deserialize)]
struct HookSchema {
    handlers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct HandlerConfig {
    #[serde(rename = "targetNames")]
    target_names: Vec<String>,
}

/// Fixed mapping from handler name to candidate semantics. The registry
/// validates schemas upstream, so anything else is an internal error.
fn handler_semantics(name: &str) -> Option<(Action, InvocationPoint)> {
    match name {
        "preCreate" => Some((Action::Create, InvocationPoint::PreProvision)),
        "preUpdate" => Some((Action::Update, InvocationPoint::PreProvision)),
        "preDelete" => Some((Action::Delete, InvocationPoint::PreProvision)),
        _ => None,
    }
}

/// Build the target report for a hook.
///
/// For each handler declared in `schema_json`, in schema order, resolves its
/// `targetNames` patterns through `resolver`, drops names excluded by the
/// configuration's `TargetFilters` (if any), and renders one block per
/// handler that retained at least one target. Names within a block preserve
/// resolver order.
pub async fn build_target_report(
    resolver: &dyn TypeNameResolver,
    schema_json: &str,
    config: &HookConfiguration,
) -> Result<String> {
    let schema: HookSchema = serde_json::from_str(schema_json)?;
    let mut blocks = String::new();

    for (handler_name, handler) in &schema.handlers {
        let (action, invocation_point) =
            handler_semantics(handler_name).ok_or_else(|| CfnHookError::Internal {
                reason: "handler name in schema is invalid".to_string(),
            })?;
        let handler: HandlerConfig = serde_json::from_value(handler.clone())?;

        let mut target_names = resolver.resolve_type_names(&handler.target_names).await?;
        if let Some(filters) = &config.target_filters {
            target_names.retain(|name| {
                matches_filters(
                    &TargetCandidate {
                        target_name: name,
                        action,
                        invocation_point,
                    },
                    filters,
                )
            });
        }

        if target_names.is_empty() {
            continue;
        }

        blocks.push_str(&format!("\n\t{handler_name}:\n\t\t"));
        if target_names.len() <= MAX_LISTED_TARGETS {
            blocks.push_str(&target_names.join("\n\t\t"));
            blocks.push('\n');
        } else {
            blocks.push_str(&format!("{} resources\n", target_names.len()));
        }
    }

    if blocks.is_empty() {
        return Ok(NO_TARGETS_MESSAGE.to_string());
    }
    Ok(format!("This Hook is configured to target:{blocks}"))
}
