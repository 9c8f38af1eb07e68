//! Container image name grammar.
//!
//! A name is a `/`-separated path. The first component may be a registry
//! host (it contains a `.` or a `:port`, or is `localhost`) when more
//! components follow; every other component follows the repository
//! component grammar.

use crate::collector::ErrorCollector;
use crate::enums::GrammarKind;
use crate::error::{Diagnostic, DiagnosticKind, ValidationResult};
use regex::Regex;
use std::sync::LazyLock;

static COMPONENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:(?:\.|-|__?)[a-z0-9]+)*$").unwrap());

static HOST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9](?:[a-z0-9-]*[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]*[a-z0-9])?)*(?::([0-9]{1,5}))?$")
        .unwrap()
});

const MAX_NAME_LENGTH: usize = 255;

const COMPONENT_RULE: &str = "lowercase letters and digits, separated by single '.', single '-' or one or two '_'";

fn mismatch(label: &str, message: String) -> Diagnostic {
    Diagnostic::new(
        DiagnosticKind::GrammarMismatch(GrammarKind::DockerImageName),
        label,
        message,
    )
}

fn looks_like_host(component: &str) -> bool {
    component.contains('.') || component.contains(':') || component == "localhost"
}

fn check_host(component: &str, value: &str, label: &str) -> Result<(), Diagnostic> {
    let port_ok = HOST_RE.captures(component).is_some_and(|caps| {
        caps.get(1)
            .is_none_or(|port| port.as_str().parse::<u16>().is_ok_and(|p| p > 0))
    });
    if port_ok {
        Ok(())
    } else {
        Err(mismatch(
            label,
            format!(
                "Invalid image name '{}' for input '{}': registry host '{}' must be a lowercase hostname with an optional port",
                value, label, component
            ),
        ))
    }
}

fn check_component(component: &str, value: &str, label: &str) -> Result<(), Diagnostic> {
    if component.is_empty() {
        return Err(mismatch(
            label,
            format!(
                "Invalid image name '{}' for input '{}': path components must not be empty",
                value, label
            ),
        ));
    }
    if COMPONENT_RE.is_match(component) {
        Ok(())
    } else {
        Err(mismatch(
            label,
            format!(
                "Invalid image name '{}' for input '{}': component '{}' must be {}",
                value, label, component, COMPONENT_RULE
            ),
        ))
    }
}

/// Validate `value` as a container image name for the input named `label`.
pub fn validate_image_name(value: &str, label: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::failure(Diagnostic::new(
            DiagnosticKind::EmptyValueRejected,
            label,
            format!("Image name cannot be empty for input '{}'", label),
        ));
    }
    if value.len() > MAX_NAME_LENGTH {
        return ValidationResult::failure(mismatch(
            label,
            format!(
                "Invalid image name for input '{}': must be at most {} characters",
                label, MAX_NAME_LENGTH
            ),
        ));
    }
    if value.chars().any(char::is_uppercase) {
        return ValidationResult::failure(mismatch(
            label,
            format!(
                "Invalid image name '{}' for input '{}': uppercase letters are not allowed",
                value, label
            ),
        ));
    }
    if value.chars().any(char::is_whitespace) {
        return ValidationResult::failure(mismatch(
            label,
            format!(
                "Invalid image name '{}' for input '{}': whitespace is not allowed",
                value, label
            ),
        ));
    }

    let components: Vec<&str> = value.split('/').collect();
    let mut errors = ErrorCollector::new();
    for (i, component) in components.iter().enumerate() {
        let checked = if i == 0 && components.len() > 1 && looks_like_host(component) {
            check_host(component, value, label)
        } else {
            check_component(component, value, label)
        };
        if let Err(diagnostic) = checked {
            errors.add(diagnostic);
        }
    }
    errors.into_result()
}
