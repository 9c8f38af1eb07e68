use action_validator::DiagnosticKind;
use std::path::PathBuf;

pub fn conformance_dir() -> PathBuf {
    std::env::var("ACTION_VALIDATOR_CONFORMANCE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("conformance"))
}

pub fn read_suite(name: &str) -> String {
    let path = conformance_dir().join(name);
    assert!(path.exists(), "Conformance fixture not found: {:?}", path);
    std::fs::read_to_string(&path).unwrap()
}

/// Snake-case name of a diagnostic kind, as written in the YAML suites.
pub fn kind_name(kind: &DiagnosticKind) -> &'static str {
    match kind {
        DiagnosticKind::MissingRequiredInput => "missing_required_input",
        DiagnosticKind::EmptyValueRejected => "empty_value_rejected",
        DiagnosticKind::GrammarMismatch(_) => "grammar_mismatch",
        DiagnosticKind::UnsupportedOperator(_) => "unsupported_operator",
        DiagnosticKind::UnsupportedEnumValue { .. } => "unsupported_enum_value",
        DiagnosticKind::FormatViolation(_) => "format_violation",
        DiagnosticKind::PathViolation => "path_violation",
    }
}
