use action_validator::enums::TypeTag;
use action_validator::registry::{action_ids, load_action, lookup_action};
use action_validator::{PathPolicy, SchemaErrorKind, parse_schema};

/// Helper: parse, expecting failure, and return the error kind.
fn schema_error_kind(input: &str) -> SchemaErrorKind {
    parse_schema(input).expect_err("parse should fail").kind
}

#[test]
fn parses_rules_in_declaration_order() {
    let schema = parse_schema(
        r#"
action: sample
description: Sample action
inputs:
  zeta:
    type: email
  alpha:
    type: go_version
    required: true
    description: Go toolchain
  mid: {}
"#,
    )
    .unwrap();

    assert_eq!(schema.action, "sample");
    assert_eq!(schema.description.as_deref(), Some("Sample action"));
    let names: Vec<&str> = schema.inputs.iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);

    let alpha = schema.inputs.get("alpha").unwrap();
    assert_eq!(alpha.type_tag, TypeTag::GoVersion);
    assert!(alpha.required);
    assert_eq!(alpha.description, "Go toolchain");

    // Omitted type means plain string.
    assert_eq!(schema.inputs.get("mid").unwrap().type_tag, TypeTag::String);
    assert_eq!(schema.inputs.required_inputs(), vec!["alpha"]);
}

#[test]
fn every_type_tag_is_accepted() {
    for tag in TypeTag::ALL {
        let input = format!("action: t\ninputs:\n  field:\n    type: {}\n", tag);
        let schema = parse_schema(&input).unwrap_or_else(|e| panic!("{}: {}", tag, e));
        assert_eq!(schema.inputs.get("field").unwrap().type_tag, tag);
    }
}

#[test]
fn config_block_overrides_defaults() {
    let schema = parse_schema(
        r#"
action: sample
config:
  flexible_channels: [edge]
  path_policy:
    allow_absolute: false
inputs:
  version:
    type: flexible_version
"#,
    )
    .unwrap();
    assert_eq!(schema.config.flexible_channels, vec!["edge"]);
    assert_eq!(
        schema.config.path_policy,
        PathPolicy {
            allow_absolute: false,
            ..PathPolicy::default()
        }
    );
    // Untouched settings keep their defaults.
    assert_eq!(schema.config.token_min_length, 40);
}

#[test]
fn rejects_empty_input() {
    assert_eq!(schema_error_kind("   \n"), SchemaErrorKind::Syntax);
}

#[test]
fn rejects_non_mapping_root() {
    assert_eq!(schema_error_kind("- a\n- b\n"), SchemaErrorKind::TypeMismatch);
}

#[test]
fn rejects_unknown_top_level_field() {
    let err = parse_schema("action: a\ninputs: {}\nrunner: linux\n").unwrap_err();
    assert_eq!(err.kind, SchemaErrorKind::TypeMismatch);
    assert_eq!(err.path.as_deref(), Some("runner"));
}

#[test]
fn rejects_unknown_type_tag() {
    let kind = schema_error_kind("action: a\ninputs:\n  x:\n    type: rust_version\n");
    assert_eq!(kind, SchemaErrorKind::UnknownVariant);
}

#[test]
fn rejects_unknown_rule_field() {
    let kind = schema_error_kind("action: a\ninputs:\n  x:\n    type: string\n    pattern: abc\n");
    assert_eq!(kind, SchemaErrorKind::UnknownVariant);
}

#[test]
fn rejects_missing_inputs() {
    assert_eq!(schema_error_kind("action: a\n"), SchemaErrorKind::TypeMismatch);
}

#[test]
fn rejects_allowed_on_non_string_rule() {
    let err = parse_schema(
        "action: a\ninputs:\n  x:\n    type: go_version\n    allowed: [\"1.21\"]\n",
    )
    .unwrap_err();
    assert_eq!(err.kind, SchemaErrorKind::InvalidRule);
    assert_eq!(err.path.as_deref(), Some("inputs.x.allowed"));
}

#[test]
fn rejects_empty_allowed_list() {
    let kind = schema_error_kind("action: a\ninputs:\n  x:\n    allowed: []\n");
    assert_eq!(kind, SchemaErrorKind::InvalidRule);
}

#[test]
fn rejects_multi_document_yaml() {
    let kind = schema_error_kind("---\naction: a\ninputs: {}\n---\naction: b\ninputs: {}\n");
    assert_eq!(kind, SchemaErrorKind::Syntax);
}

#[test]
fn schema_round_trips_through_json() {
    let schema = load_action("version-file-parser").unwrap();
    let json = serde_json::to_value(&schema).unwrap();
    let names: Vec<&String> = json["inputs"].as_object().unwrap().keys().collect();
    assert_eq!(
        names,
        vec!["language", "tool-versions-file", "dockerfile", "default-version"]
    );
    assert_eq!(json["inputs"]["language"]["type"], "string");
}

#[test]
fn registry_lists_ten_actions() {
    let ids: Vec<&str> = action_ids().collect();
    assert_eq!(ids.len(), 10);
    assert!(lookup_action("go-lint").is_some());
    assert!(lookup_action("go").is_none());
}
