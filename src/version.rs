//! Version string grammars for Go, PHP, Python, Terraform and the flexible
//! (generic dotted) ecosystem.
//!
//! Every ecosystem is one entry in a static grammar table and all of them run
//! through the same pipeline: named channel, exact version, wildcard, then
//! comparator constraint clauses. Empty strings never reach that pipeline;
//! [`validate_version`] rejects them first.

use crate::config::ValidatorConfig;
use crate::enums::{Ecosystem, GrammarKind, VersionShape};
use crate::error::{Diagnostic, DiagnosticKind, ValidationResult};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

// ─── Cached regexes ─────────────────────────────────────────────────────────

static GO_EXACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:go)?[0-9]+(?:\.[0-9]+){0,2}(?:(?:beta|rc)[0-9]+)?$").unwrap()
});

static PHP_EXACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+){0,2}$").unwrap());

static PYTHON_EXACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:pypy|graalpy)-?)?[0-9]+(?:\.[0-9]+){0,2}(?:(?:a|b|rc)[0-9]+)?$").unwrap()
});

static PYTHON_WILDCARD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?\.x$").unwrap());

static PYTHON_CLAUSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(?:\.[0-9]+){0,2}(?:\.\*|(?:a|b|rc)[0-9]+)?$").unwrap()
});

static TERRAFORM_EXACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(?:\.[0-9]+){0,2}(?:-[0-9A-Za-z]+(?:\.[0-9A-Za-z]+)*)?$").unwrap()
});

static FLEXIBLE_EXACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^v?(?:0|[1-9][0-9]*)(?:\.(?:0|[1-9][0-9]*))*(?:-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?$",
    )
    .unwrap()
});

const OPERATOR_CHARS: &[char] = &['<', '>', '=', '!', '~', '^'];

// ─── Grammar table ──────────────────────────────────────────────────────────

struct VersionGrammar {
    ecosystem: Ecosystem,
    /// Short description of the accepted forms, quoted in mismatch diagnostics.
    expected: &'static str,
    channels: &'static [&'static str],
    exact: &'static LazyLock<Regex>,
    wildcard: Option<&'static LazyLock<Regex>>,
    /// Grammar for the operand of a comparator clause; `None` reuses `exact`.
    clause: Option<&'static LazyLock<Regex>>,
    operators: &'static [&'static str],
    list_separators: &'static [char],
}

static GRAMMARS: [VersionGrammar; 5] = [
    VersionGrammar {
        ecosystem: Ecosystem::Go,
        expected: "a Go release such as 1.21.3, go1.22 or 1.22rc1, or one of: stable, oldstable, tip",
        channels: &["stable", "oldstable", "tip"],
        exact: &GO_EXACT_RE,
        wildcard: None,
        clause: None,
        operators: &[],
        list_separators: &[],
    },
    VersionGrammar {
        ecosystem: Ecosystem::Php,
        expected: "a PHP version such as 8.2, a constraint such as >=8.1, ^8.0 or ~8.1.0, or a comma-separated constraint list",
        channels: &[],
        exact: &PHP_EXACT_RE,
        wildcard: None,
        clause: None,
        operators: &[">=", "<=", ">", "<", "=", "==", "!=", "^", "~"],
        list_separators: &[',', '|'],
    },
    VersionGrammar {
        ecosystem: Ecosystem::Python,
        expected: "a Python version such as 3.12, a wildcard such as 3.x, a constraint list such as >=3.8,<4.0, or an implementation version such as pypy3.9",
        channels: &[],
        exact: &PYTHON_EXACT_RE,
        wildcard: Some(&PYTHON_WILDCARD_RE),
        clause: Some(&PYTHON_CLAUSE_RE),
        operators: &["===", "==", "!=", "~=", ">=", "<=", ">", "<"],
        list_separators: &[','],
    },
    VersionGrammar {
        ecosystem: Ecosystem::Terraform,
        expected: "a Terraform version such as 1.6.0 or a constraint such as >=1.0 or ~>1.2.0",
        channels: &[],
        exact: &TERRAFORM_EXACT_RE,
        wildcard: None,
        clause: None,
        operators: &["=", "!=", ">", ">=", "<", "<=", "~>"],
        list_separators: &[','],
    },
    VersionGrammar {
        ecosystem: Ecosystem::Flexible,
        expected: "a dotted numeric version without leading zeros such as 1.2.3 or v1.2.3-rc.1+build.5",
        channels: &[],
        exact: &FLEXIBLE_EXACT_RE,
        wildcard: None,
        clause: None,
        operators: &[],
        list_separators: &[],
    },
];

fn grammar_for(ecosystem: Ecosystem) -> &'static VersionGrammar {
    match ecosystem {
        Ecosystem::Go => &GRAMMARS[0],
        Ecosystem::Php => &GRAMMARS[1],
        Ecosystem::Python => &GRAMMARS[2],
        Ecosystem::Terraform => &GRAMMARS[3],
        Ecosystem::Flexible => &GRAMMARS[4],
    }
}

// ─── Specifier ──────────────────────────────────────────────────────────────

/// A recognized version string. Lives only for the duration of one check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VersionSpecifier {
    pub ecosystem: Ecosystem,
    pub raw: String,
    pub shape: VersionShape,
}

enum Rejection {
    NotAVersion,
    EmptyClause,
    UnknownOperator(String),
    InvalidSemver(String),
}

impl VersionGrammar {
    fn is_channel(&self, value: &str, config: &ValidatorConfig) -> bool {
        match self.ecosystem {
            Ecosystem::Flexible => config.is_flexible_channel(value),
            _ => self.channels.iter().any(|c| *c == value),
        }
    }

    fn is_exact_or_wildcard(&self, value: &str) -> bool {
        self.exact.is_match(value) || self.wildcard.is_some_and(|re| re.is_match(value))
    }

    fn classify(&self, value: &str, config: &ValidatorConfig) -> Result<VersionShape, Rejection> {
        if self.is_channel(value, config) {
            return Ok(VersionShape::Channel);
        }
        if self.exact.is_match(value) {
            self.check_exact(value)?;
            return Ok(VersionShape::Exact);
        }
        if self.wildcard.is_some_and(|re| re.is_match(value)) {
            return Ok(VersionShape::Wildcard);
        }

        let clauses = self.split_clauses(value);
        let is_list = clauses.len() > 1;
        for clause in clauses {
            let clause = clause.trim();
            if clause.is_empty() {
                return Err(Rejection::EmptyClause);
            }
            let (operator, operand) = split_operator(clause);
            if operator.is_empty() {
                // A bare version is only meaningful as one member of a list.
                if is_list && self.is_exact_or_wildcard(operand) {
                    continue;
                }
                return Err(Rejection::NotAVersion);
            }
            if !self.operators.iter().any(|op| *op == operator) {
                return Err(Rejection::UnknownOperator(operator.to_string()));
            }
            let operand_re = self.clause.unwrap_or(self.exact);
            if !operand_re.is_match(operand) {
                return Err(Rejection::NotAVersion);
            }
        }
        Ok(VersionShape::Constraint)
    }

    fn split_clauses<'v>(&self, value: &'v str) -> Vec<&'v str> {
        if self.list_separators.is_empty() {
            return vec![value];
        }
        let mut clauses = Vec::new();
        let mut rest = value;
        while let Some(pos) = rest.find(self.list_separators) {
            clauses.push(&rest[..pos]);
            let sep_len = if rest[pos..].starts_with("||") { 2 } else { 1 };
            rest = &rest[pos + sep_len..];
        }
        clauses.push(rest);
        clauses
    }

    /// Flexible prerelease and build tags must also follow semver identifier
    /// rules, which rule out numeric identifiers with leading zeros.
    fn check_exact(&self, value: &str) -> Result<(), Rejection> {
        if self.ecosystem != Ecosystem::Flexible {
            return Ok(());
        }
        let (rest, build) = match value.split_once('+') {
            Some((rest, build)) => (rest, Some(build)),
            None => (value, None),
        };
        if let Some((_, pre)) = rest.split_once('-') {
            semver::Prerelease::new(pre).map_err(|e| Rejection::InvalidSemver(e.to_string()))?;
        }
        if let Some(build) = build {
            semver::BuildMetadata::new(build)
                .map_err(|e| Rejection::InvalidSemver(e.to_string()))?;
        }
        Ok(())
    }

    fn expected(&self, config: &ValidatorConfig) -> String {
        if self.ecosystem == Ecosystem::Flexible && !config.flexible_channels.is_empty() {
            format!(
                "{}, or one of: {}",
                self.expected,
                config.flexible_channels.join(", ")
            )
        } else {
            self.expected.to_string()
        }
    }

    fn diagnostic(
        &self,
        rejection: Rejection,
        value: &str,
        label: &str,
        config: &ValidatorConfig,
    ) -> Diagnostic {
        let noun = self.ecosystem.noun();
        let mismatch = DiagnosticKind::GrammarMismatch(GrammarKind::Version(self.ecosystem));
        match rejection {
            Rejection::NotAVersion => Diagnostic::new(
                mismatch,
                label,
                format!(
                    "Invalid {} '{}' for input '{}': expected {}",
                    noun,
                    value,
                    label,
                    self.expected(config)
                ),
            ),
            Rejection::EmptyClause => Diagnostic::new(
                mismatch,
                label,
                format!(
                    "Invalid {} '{}' for input '{}': constraint list contains an empty clause",
                    noun, value, label
                ),
            ),
            Rejection::InvalidSemver(reason) => Diagnostic::new(
                mismatch,
                label,
                format!(
                    "Invalid {} '{}' for input '{}': {}",
                    noun, value, label, reason
                ),
            ),
            Rejection::UnknownOperator(operator) => {
                let allowed = if self.operators.is_empty() {
                    format!("{} versions do not accept comparators", self.ecosystem)
                } else {
                    format!("allowed comparators are {}", self.operators.join(", "))
                };
                Diagnostic::new(
                    DiagnosticKind::UnsupportedOperator(self.ecosystem),
                    label,
                    format!(
                        "Unsupported comparator '{}' in '{}' for input '{}': {}",
                        operator, value, label, allowed
                    ),
                )
            }
        }
    }
}

/// Split a clause into its leading comparator and the trimmed operand.
fn split_operator(clause: &str) -> (&str, &str) {
    let end = clause
        .find(|c: char| !OPERATOR_CHARS.contains(&c))
        .unwrap_or(clause.len());
    (&clause[..end], clause[end..].trim_start())
}

/// Classify a non-empty version string for `ecosystem`.
///
/// Callers must reject empty strings before calling this; use
/// [`validate_version`] for the full check.
pub fn parse_version_specifier(
    ecosystem: Ecosystem,
    value: &str,
    label: &str,
    config: &ValidatorConfig,
) -> Result<VersionSpecifier, Diagnostic> {
    let grammar = grammar_for(ecosystem);
    let shape = grammar
        .classify(value, config)
        .map_err(|rejection| grammar.diagnostic(rejection, value, label, config))?;
    Ok(VersionSpecifier {
        ecosystem,
        raw: value.to_string(),
        shape,
    })
}

/// Validate `value` as a version of `ecosystem` for the input named `label`.
pub fn validate_version(
    ecosystem: Ecosystem,
    value: &str,
    label: &str,
    config: &ValidatorConfig,
) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::failure(Diagnostic::new(
            DiagnosticKind::EmptyValueRejected,
            label,
            format!("{} cannot be empty for input '{}'", ecosystem.noun(), label),
        ));
    }
    parse_version_specifier(ecosystem, value, label, config)
        .map(|_| ())
        .into()
}
