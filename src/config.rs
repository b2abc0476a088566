//! The hook type configuration document and its display helpers.
//!
//! The configuration is stored by the registry as a JSON string nested under
//! `CloudFormationConfiguration.HookConfiguration`; these types mirror that
//! wire shape exactly so the same structs serve reads (describe) and writes
//! (enable-lambda-*).

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::targets::TargetFilters;

/// Top level of the type configuration JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TypeConfiguration {
    pub cloud_formation_configuration: CloudFormationConfiguration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CloudFormationConfiguration {
    pub hook_configuration: HookConfiguration,
}

/// Runtime behavior of a registered hook. Read-only snapshot fetched per
/// invocation; never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HookConfiguration {
    pub failure_mode: FailureMode,

    pub target_stacks: TargetStacks,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_filters: Option<StackFilters>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_filters: Option<TargetFilters>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureMode {
    #[value(name = "WARN")]
    Warn,
    #[value(name = "FAIL")]
    Fail,
}

impl fmt::Display for FailureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FailureMode::Warn => "WARN",
            FailureMode::Fail => "FAIL",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetStacks {
    All,
    None,
}

impl fmt::Display for TargetStacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TargetStacks::All => "ALL",
            TargetStacks::None => "NONE",
        })
    }
}

/// Declarative stack-level filters attached to a hook configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackFilters {
    pub filtering_criteria: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_names: Option<StackFilterList>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_roles: Option<StackFilterList>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackFilterList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
}

impl HookConfiguration {
    /// The configuration assumed when the account has never had one set.
    pub fn default_substitute() -> Self {
        Self {
            failure_mode: FailureMode::Warn,
            target_stacks: TargetStacks::None,
            properties: None,
            stack_filters: None,
            target_filters: None,
        }
    }

    /// Two-column table of the configured properties, or a fixed notice when
    /// there are none. Rows are tab-indented for the describe output.
    pub fn properties_table(&self) -> String {
        let properties = match &self.properties {
            Some(properties) if !properties.is_empty() => properties,
            _ => return "No configured properties.".to_string(),
        };

        // Pad the key column to the widest key so the separator lines up.
        let key_width = properties
            .keys()
            .map(String::len)
            .max()
            .unwrap_or(0)
            .max("Property".len())
            + 2;

        let mut table = format!(
            "Configured properties:\n\t\tProperty{}| Value\n\t\t{}\n",
            " ".repeat(key_width - "Property".len()),
            "-".repeat(key_width + 10),
        );
        let rows: Vec<String> = properties
            .iter()
            .map(|(key, value)| {
                format!("\t\t{}{}| {}", key, " ".repeat(key_width - key.len()), render_value(value))
            })
            .collect();
        table.push_str(&rows.join("\n"));
        table
    }

    /// Indented summary of the stack filters, or an empty string when none
    /// are configured.
    pub fn stack_filters_summary(&self) -> String {
        let filters = match &self.stack_filters {
            Some(filters) => filters,
            None => return String::new(),
        };

        let mut summary = format!(
            "\t\tStack Filters:\n\t\t\tFiltering Criteria: {}\n",
            filters.filtering_criteria
        );
        for (label, list) in [
            ("StackNames", &filters.stack_names),
            ("StackRoles", &filters.stack_roles),
        ] {
            if let Some(list) = list {
                summary.push_str(&format!("\t\t\t{label}:\n"));
                if let Some(include) = &list.include {
                    summary.push_str(&format!("\t\t\t\tInclude: {include:?}\n"));
                }
                if let Some(exclude) = &list.exclude {
                    summary.push_str(&format!("\t\t\t\tExclude: {exclude:?}\n"));
                }
            }
        }
        summary
    }
}

/// Property values print bare for strings and as JSON otherwise.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
