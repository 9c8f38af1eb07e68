use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{Ecosystem, FormatKind, GrammarKind};

/// Classification of a validation diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    MissingRequiredInput,
    EmptyValueRejected,
    GrammarMismatch(GrammarKind),
    UnsupportedOperator(Ecosystem),
    UnsupportedEnumValue { allowed: Vec<String> },
    FormatViolation(FormatKind),
    PathViolation,
}

/// A single human-readable validation failure.
///
/// Two diagnostics are considered the same message when their `message`
/// text is identical; the collector deduplicates on that text alone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub field: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, field: impl Into<String>, message: impl Into<String>) -> Self {
        Diagnostic {
            kind,
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn missing_required(field: &str) -> Self {
        Diagnostic::new(
            DiagnosticKind::MissingRequiredInput,
            field,
            format!("Required input '{}' is missing", field),
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of a validation run or of a single grammar check.
///
/// Validity is derived from the diagnostics, so `is_valid()` can never
/// disagree with `diagnostics().is_empty()`. Diagnostics are unique by text
/// and keep first-seen order; the only way to build a failing result is
/// through [`crate::collector::ErrorCollector`] or [`ValidationResult::failure`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn success() -> Self {
        ValidationResult::default()
    }

    pub fn failure(diagnostic: Diagnostic) -> Self {
        ValidationResult {
            diagnostics: vec![diagnostic],
        }
    }

    /// Callers must guarantee `diagnostics` holds no duplicate texts.
    pub(crate) fn from_unique(diagnostics: Vec<Diagnostic>) -> Self {
        ValidationResult { diagnostics }
    }

    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Diagnostic texts in report order, one per line when printed.
    pub fn messages(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.message.as_str()).collect()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl From<Result<(), Diagnostic>> for ValidationResult {
    fn from(result: Result<(), Diagnostic>) -> Self {
        match result {
            Ok(()) => ValidationResult::success(),
            Err(diagnostic) => ValidationResult::failure(diagnostic),
        }
    }
}

/// Error kind for rule-schema load failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaErrorKind {
    Syntax,
    TypeMismatch,
    UnknownVariant,
    InvalidRule,
}

/// Produced when a rule-schema document cannot be turned into a rule table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaError {
    pub kind: SchemaErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "{}: {}", path, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for SchemaError {}

/// Combined error type for the [`crate::validate_action`] entry point.
#[derive(Clone, Debug)]
pub enum ActionError {
    UnknownAction(String),
    Schema(SchemaError),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::UnknownAction(id) => write!(f, "Unknown action: {}", id),
            ActionError::Schema(e) => write!(f, "Schema error: {}", e),
        }
    }
}

impl std::error::Error for ActionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ActionError::UnknownAction(_) => None,
            ActionError::Schema(e) => Some(e),
        }
    }
}

impl From<SchemaError> for ActionError {
    fn from(e: SchemaError) -> Self {
        ActionError::Schema(e)
    }
}
