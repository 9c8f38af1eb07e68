//! Rule-driven input validation.
//!
//! Returns **all** diagnostics, not just the first. Validation never modifies
//! the inputs or the rule table, and every run starts from a fresh collector.

use crate::collector::ErrorCollector;
use crate::config::ValidatorConfig;
use crate::contact::{validate_email, validate_token};
use crate::enums::{PathKind, TypeTag};
use crate::error::{Diagnostic, DiagnosticKind, ValidationResult};
use crate::image::validate_image_name;
use crate::path::validate_path;
use crate::types::{ActionSchema, Inputs, Rule, RuleTable};
use crate::version::validate_version;
use tracing::debug;

// ─── Grammar table ──────────────────────────────────────────────────────────

/// What a grammar check gets to see about the input it checks.
struct Field<'a> {
    name: &'a str,
    rule: &'a Rule,
    config: &'a ValidatorConfig,
}

type GrammarFn = fn(&str, &Field<'_>) -> ValidationResult;

struct GrammarEntry {
    tag: TypeTag,
    check: GrammarFn,
}

static GRAMMAR_TABLE: &[GrammarEntry] = &[
    GrammarEntry {
        tag: TypeTag::String,
        check: check_string,
    },
    GrammarEntry {
        tag: TypeTag::Directory,
        check: check_directory,
    },
    GrammarEntry {
        tag: TypeTag::File,
        check: check_file,
    },
    GrammarEntry {
        tag: TypeTag::GoVersion,
        check: check_version,
    },
    GrammarEntry {
        tag: TypeTag::PhpVersion,
        check: check_version,
    },
    GrammarEntry {
        tag: TypeTag::PythonVersion,
        check: check_version,
    },
    GrammarEntry {
        tag: TypeTag::TerraformVersion,
        check: check_version,
    },
    GrammarEntry {
        tag: TypeTag::FlexibleVersion,
        check: check_version,
    },
    GrammarEntry {
        tag: TypeTag::DockerImageName,
        check: check_docker_image_name,
    },
    GrammarEntry {
        tag: TypeTag::Email,
        check: check_email,
    },
    GrammarEntry {
        tag: TypeTag::GithubToken,
        check: check_github_token,
    },
];

fn lookup_grammar(tag: TypeTag) -> Option<GrammarFn> {
    GRAMMAR_TABLE.iter().find(|e| e.tag == tag).map(|e| e.check)
}

/// Plain strings pass unless the rule pins them to a closed set.
fn check_string(value: &str, field: &Field<'_>) -> ValidationResult {
    match &field.rule.allowed {
        Some(allowed) if !allowed.iter().any(|a| a == value) => {
            ValidationResult::failure(Diagnostic::new(
                DiagnosticKind::UnsupportedEnumValue {
                    allowed: allowed.clone(),
                },
                field.name,
                format!(
                    "Invalid value '{}' for input '{}': must be one of: {}",
                    value,
                    field.name,
                    allowed.join(", ")
                ),
            ))
        }
        _ => ValidationResult::success(),
    }
}

fn check_directory(value: &str, field: &Field<'_>) -> ValidationResult {
    validate_path(
        value,
        field.name,
        PathKind::Directory,
        &field.config.path_policy,
    )
}

fn check_file(value: &str, field: &Field<'_>) -> ValidationResult {
    validate_path(value, field.name, PathKind::File, &field.config.path_policy)
}

/// Every version tag shares one check; the tag picks the ecosystem.
fn check_version(value: &str, field: &Field<'_>) -> ValidationResult {
    match field.rule.type_tag.ecosystem() {
        Some(ecosystem) => validate_version(ecosystem, value, field.name, field.config),
        None => ValidationResult::success(),
    }
}

fn check_docker_image_name(value: &str, field: &Field<'_>) -> ValidationResult {
    validate_image_name(value, field.name)
}

fn check_email(value: &str, field: &Field<'_>) -> ValidationResult {
    validate_email(value, field.name)
}

fn check_github_token(value: &str, field: &Field<'_>) -> ValidationResult {
    validate_token(value, field.name, field.rule.required, field.config)
}

// ─── Dispatcher ─────────────────────────────────────────────────────────────

/// Applies one rule table to input maps.
pub struct Dispatcher<'a> {
    rules: &'a RuleTable,
    config: &'a ValidatorConfig,
}

impl<'a> Dispatcher<'a> {
    pub fn new(rules: &'a RuleTable, config: &'a ValidatorConfig) -> Self {
        Dispatcher { rules, config }
    }

    pub fn for_schema(schema: &'a ActionSchema) -> Self {
        Dispatcher::new(&schema.inputs, &schema.config)
    }

    /// Validate `inputs` against the rule table.
    ///
    /// Required inputs that are absent or empty are reported first and their
    /// grammar is not run. Every other declared input that is present, even
    /// as an empty string, goes through the grammar selected by its type tag.
    /// Absent optional inputs are skipped.
    pub fn validate(&self, inputs: &Inputs) -> ValidationResult {
        let mut errors = ErrorCollector::new();

        for name in self.rules.required_inputs() {
            if inputs.get(name).is_none_or(|v| v.is_empty()) {
                errors.add(Diagnostic::missing_required(name));
            }
        }

        for (name, rule) in self.rules.iter() {
            let Some(value) = inputs.get(name) else {
                continue;
            };
            if rule.required && value.is_empty() {
                continue;
            }
            let Some(check) = lookup_grammar(rule.type_tag) else {
                continue;
            };
            debug!(input = name, type_tag = %rule.type_tag, "checking input");
            let field = Field {
                name,
                rule,
                config: self.config,
            };
            errors.merge(check(value, &field));
        }

        for name in inputs.keys().filter(|n| !self.rules.contains(n)) {
            debug!(input = %name, "ignoring undeclared input");
        }

        let result = errors.into_result();
        debug!(
            valid = result.is_valid(),
            diagnostics = result.diagnostics().len(),
            "validation finished"
        );
        result
    }
}

/// Validate `inputs` against `rules` with the default configuration.
pub fn validate(inputs: &Inputs, rules: &RuleTable) -> ValidationResult {
    let config = ValidatorConfig::default();
    Dispatcher::new(rules, &config).validate(inputs)
}

/// Validate `inputs` against a parsed schema, honoring its configuration.
pub fn validate_schema(schema: &ActionSchema, inputs: &Inputs) -> ValidationResult {
    Dispatcher::for_schema(schema).validate(inputs)
}
