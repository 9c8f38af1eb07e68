//! Email address and access-token grammars.

use crate::config::ValidatorConfig;
use crate::enums::FormatKind;
use crate::error::{Diagnostic, DiagnosticKind, ValidationResult};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
    )
    .unwrap()
});

static TOKEN_BODY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());

static CLASSIC_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9a-f]{40}$").unwrap());

static EXPRESSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\$\{\{\s*[A-Za-z_][A-Za-z0-9_.\-]*(?:\[['][A-Za-z0-9_.\-]+[']\])?\s*\}\}$").unwrap()
});

fn email_violation(label: &str, message: String) -> Diagnostic {
    Diagnostic::new(
        DiagnosticKind::FormatViolation(FormatKind::Email),
        label,
        message,
    )
}

/// Validate `value` as an email address for the input named `label`.
pub fn validate_email(value: &str, label: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::failure(Diagnostic::new(
            DiagnosticKind::EmptyValueRejected,
            label,
            format!("Email address cannot be empty for input '{}'", label),
        ));
    }
    if !value.is_ascii() || value.chars().any(char::is_whitespace) {
        return ValidationResult::failure(email_violation(
            label,
            format!(
                "Invalid email address '{}' for input '{}': must be ASCII without whitespace",
                value, label
            ),
        ));
    }
    if value.matches('@').count() != 1 {
        return ValidationResult::failure(email_violation(
            label,
            format!(
                "Invalid email address '{}' for input '{}': must contain exactly one '@'",
                value, label
            ),
        ));
    }

    let local = value.split('@').next().unwrap_or_default();
    let dotted_badly = local.starts_with('.') || local.ends_with('.') || local.contains("..");
    if dotted_badly || !EMAIL_RE.is_match(value) {
        return ValidationResult::failure(email_violation(
            label,
            format!(
                "Invalid email address '{}' for input '{}': expected local-part@domain.tld",
                value, label
            ),
        ));
    }
    ValidationResult::success()
}

fn token_violation(label: &str, message: String) -> Diagnostic {
    Diagnostic::new(
        DiagnosticKind::FormatViolation(FormatKind::Token),
        label,
        message,
    )
}

/// Validate `value` as an access token for the input named `label`.
///
/// An optional token that is empty is accepted without further checks.
/// Diagnostics never echo the token itself.
pub fn validate_token(
    value: &str,
    label: &str,
    required: bool,
    config: &ValidatorConfig,
) -> ValidationResult {
    if value.is_empty() {
        if !required {
            return ValidationResult::success();
        }
        return ValidationResult::failure(Diagnostic::new(
            DiagnosticKind::EmptyValueRejected,
            label,
            format!("Token cannot be empty for input '{}'", label),
        ));
    }

    // Unexpanded workflow expressions such as `${{ secrets.GITHUB_TOKEN }}`.
    if EXPRESSION_RE.is_match(value) || CLASSIC_TOKEN_RE.is_match(value) {
        return ValidationResult::success();
    }

    if value.chars().any(char::is_whitespace) {
        return ValidationResult::failure(token_violation(
            label,
            format!("Invalid token for input '{}': must not contain whitespace", label),
        ));
    }

    let Some(prefix) = config
        .token_prefixes
        .iter()
        .find(|p| value.starts_with(p.as_str()))
    else {
        return ValidationResult::failure(token_violation(
            label,
            format!(
                "Invalid token for input '{}': must start with one of: {}",
                label,
                config.token_prefixes.join(", ")
            ),
        ));
    };

    let body = &value[prefix.len()..];
    if !TOKEN_BODY_RE.is_match(body) {
        return ValidationResult::failure(token_violation(
            label,
            format!(
                "Invalid token for input '{}': only letters, digits and '_' may follow the '{}' prefix",
                label, prefix
            ),
        ));
    }
    if value.len() < config.token_min_length {
        return ValidationResult::failure(token_violation(
            label,
            format!(
                "Invalid token for input '{}': must be at least {} characters long",
                label, config.token_min_length
            ),
        ));
    }
    ValidationResult::success()
}
