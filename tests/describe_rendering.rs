//! Tests for the describe command's pure rendering helpers: the properties
//! table, the stack filter summary, and version id padding.

use cfn_hook::cli::describe::describe_summary;
use cfn_hook::config::{
    FailureMode, HookConfiguration, StackFilterList, StackFilters, TargetStacks,
};
use cfn_hook::registry::{pad_version_id, HookTypeData};
use serde_json::json;

fn config_with_properties(properties: serde_json::Value) -> HookConfiguration {
    let mut config = HookConfiguration::default_substitute();
    config.properties = serde_json::from_value(properties).unwrap();
    config
}

// ---------------------------------------------------------------------------
// properties_table()
// ---------------------------------------------------------------------------

#[test]
fn no_properties() {
    assert_eq!(
        HookConfiguration::default_substitute().properties_table(),
        "No configured properties."
    );
    assert_eq!(
        config_with_properties(json!({})).properties_table(),
        "No configured properties."
    );
}

#[test]
fn one_property() {
    let table = config_with_properties(json!({ "Prop1": "Value1" })).properties_table();
    assert_eq!(
        table,
        "Configured properties:\n\
         \t\tProperty  | Value\n\
         \t\t--------------------\n\
         \t\tProp1     | Value1"
    );
}

#[test]
fn key_column_pads_to_the_widest_key() {
    let table =
        config_with_properties(json!({ "AVeryLongPropertyName": "x", "MinStacks": 2 }))
            .properties_table();
    assert_eq!(
        table,
        "Configured properties:\n\
         \t\tProperty               | Value\n\
         \t\t---------------------------------\n\
         \t\tAVeryLongPropertyName  | x\n\
         \t\tMinStacks              | 2"
    );
}

#[test]
fn non_string_values_render_as_json() {
    let table = config_with_properties(json!({
        "ExtraList": ["value1", "value2"],
        "MinStacks": 2
    }))
    .properties_table();
    assert_eq!(
        table,
        "Configured properties:\n\
         \t\tProperty   | Value\n\
         \t\t---------------------\n\
         \t\tExtraList  | [\"value1\",\"value2\"]\n\
         \t\tMinStacks  | 2"
    );
}

// ---------------------------------------------------------------------------
// stack_filters_summary()
// ---------------------------------------------------------------------------

#[test]
fn no_stack_filters_is_an_empty_string() {
    assert_eq!(
        HookConfiguration::default_substitute().stack_filters_summary(),
        ""
    );
}

#[test]
fn stack_filters_render_include_and_exclude_blocks() {
    let mut config = HookConfiguration::default_substitute();
    config.stack_filters = Some(StackFilters {
        filtering_criteria: "ANY".to_string(),
        stack_names: Some(StackFilterList {
            include: Some(vec!["my-stack-1".to_string()]),
            exclude: None,
        }),
        stack_roles: Some(StackFilterList {
            include: None,
            exclude: Some(vec!["my-stack-role-2".to_string()]),
        }),
    });

    assert_eq!(
        config.stack_filters_summary(),
        "\t\tStack Filters:\n\
         \t\t\tFiltering Criteria: ANY\n\
         \t\t\tStackNames:\n\
         \t\t\t\tInclude: [\"my-stack-1\"]\n\
         \t\t\tStackRoles:\n\
         \t\t\t\tExclude: [\"my-stack-role-2\"]\n"
    );
}

// ---------------------------------------------------------------------------
// pad_version_id() and describe_summary()
// ---------------------------------------------------------------------------

#[test]
fn version_ids_pad_to_eight_characters() {
    assert_eq!(pad_version_id("1"), "00000001");
    assert_eq!(pad_version_id("42"), "00000042");
    assert_eq!(pad_version_id("00000007"), "00000007");
    assert_eq!(pad_version_id("123456789"), "123456789");
}

#[test]
fn configuration_block_keeps_a_blank_line_before_the_properties() {
    let hook_data = HookTypeData {
        default_version_id: "00000002".to_string(),
        ..Default::default()
    };
    let config = HookConfiguration::default_substitute();

    let summary = describe_summary(
        &hook_data,
        &HookTypeData::default(),
        &config,
        "00000002",
        "Based on the schema and target filters, this hook has no targets.\n",
    );

    assert!(summary.contains(
        "\nCurrent configuration (only applies to default version):\n\
         \tDefault version: 00000002\n\
         \tConfigured behavior:\n\
         \t\tFailure mode: WARN\n\
         \t\tTarget stacks: NONE\n\
         \n\tNo configured properties.\n"
    ));
}

#[test]
fn summary_includes_configuration_and_report() {
    let hook_data = HookTypeData {
        default_version_id: "00000002".to_string(),
        ..Default::default()
    };
    let versioned = HookTypeData {
        description: "Checks bucket encryption".to_string(),
        time_created: "2024-01-01T00:00:00Z".to_string(),
        last_updated: "2024-02-01T00:00:00Z".to_string(),
        type_tests_status: "PASSED".to_string(),
        ..Default::default()
    };
    let mut config = HookConfiguration::default_substitute();
    config.failure_mode = FailureMode::Fail;
    config.target_stacks = TargetStacks::All;

    let summary = describe_summary(
        &hook_data,
        &versioned,
        &config,
        "00000003",
        "Based on the schema and target filters, this hook has no targets.\n",
    );

    assert!(summary.starts_with("\nDescription: Checks bucket encryption\n"));
    assert!(summary.contains("Version 00000003 Created at: 2024-01-01T00:00:00Z\n"));
    assert!(summary.contains("Version 00000003 Last updated at: 2024-02-01T00:00:00Z\n"));
    assert!(summary.contains("\tDefault version: 00000002\n"));
    assert!(summary.contains("\t\tFailure mode: FAIL\n"));
    assert!(summary.contains("\t\tTarget stacks: ALL\n"));
    assert!(summary.contains("this hook has no targets"));
    assert!(summary.ends_with("Testing status: PASSED"));
}
