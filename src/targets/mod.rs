//! Hook target types and the target filter matcher.
//!
//! A hook's type configuration may carry a `TargetFilters` block that narrows
//! which resource types its handlers actually fire for. The matcher here is a
//! pure predicate over one candidate target; resolving wildcard target-name
//! patterns into concrete type names lives in [`resolver`].

pub mod report;
pub mod resolver;

use serde::{Deserialize, Serialize};

/// A provisioning action a hook handler intercepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Create,
    Update,
    Delete,
}

/// When, relative to provisioning, the hook runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvocationPoint {
    PreProvision,
    PostProvision,
}

/// One candidate target, constructed per resolved name while building the
/// target report. Never persisted.
#[derive(Debug, Clone, Copy)]
pub struct TargetCandidate<'a> {
    pub target_name: &'a str,
    pub action: Action,
    pub invocation_point: InvocationPoint,
}

/// The `TargetFilters` block of a hook type configuration.
///
/// Two mutually exclusive shapes share this struct: an explicit `Targets`
/// list of (name, action, invocation point) triples, or any combination of
/// the three independent dimension lists. When `Targets` is present it alone
/// determines matching. An absent dimension means "match all", so an empty
/// filter block matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TargetFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<TargetFilterEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_names: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Action>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invocation_points: Option<Vec<InvocationPoint>>,
}

/// An explicit filter triple. `target_name` may contain wildcards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TargetFilterEntry {
    pub target_name: String,
    pub action: Action,
    pub invocation_point: InvocationPoint,
}

/// Whether a target-name pattern needs glob matching at all.
pub fn contains_wildcard(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Shell-glob match of a full target name against a single pattern.
/// `*` matches any run of characters and `?` a single character; target
/// names are not path-segment aware. A pattern that fails to compile as a
/// glob degrades to literal comparison so the matcher stays infallible.
pub fn wildcard_match(target_name: &str, pattern: &str) -> bool {
    match globset::Glob::new(pattern) {
        Ok(glob) => glob.compile_matcher().is_match(target_name),
        Err(_) => target_name == pattern,
    }
}

/// Decide whether `candidate` is in scope for the hook under `filters`.
pub fn matches_filters(candidate: &TargetCandidate<'_>, filters: &TargetFilters) -> bool {
    // Explicit-triple mode: the dimension lists are ignored entirely.
    if let Some(targets) = &filters.targets {
        return targets.iter().any(|entry| {
            let name_matches = if contains_wildcard(&entry.target_name) {
                wildcard_match(candidate.target_name, &entry.target_name)
            } else {
                candidate.target_name == entry.target_name
            };
            name_matches
                && entry.action == candidate.action
                && entry.invocation_point == candidate.invocation_point
        });
    }

    let name_matches = filters.target_names.as_ref().map_or(true, |patterns| {
        patterns
            .iter()
            .any(|pattern| wildcard_match(candidate.target_name, pattern))
    });
    let action_matches = filters
        .actions
        .as_ref()
        .map_or(true, |actions| actions.contains(&candidate.action));
    let invocation_point_matches = filters
        .invocation_points
        .as_ref()
        .map_or(true, |points| points.contains(&candidate.invocation_point));

    name_matches && action_matches && invocation_point_matches
}
