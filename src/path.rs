//! Syntactic checks for `file` and `directory` inputs.
//!
//! Nothing here touches the filesystem; whether the path exists is the
//! caller's concern.

use crate::config::PathPolicy;
use crate::enums::PathKind;
use crate::error::{Diagnostic, DiagnosticKind, ValidationResult};

fn violation(label: &str, message: String) -> Diagnostic {
    Diagnostic::new(DiagnosticKind::PathViolation, label, message)
}

fn is_absolute(value: &str) -> bool {
    if value.starts_with('/') || value.starts_with('\\') {
        return true;
    }
    // Windows drive paths such as `C:\work` or `C:/work`.
    let bytes = value.as_bytes();
    bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes[2] == b'/' || bytes[2] == b'\\')
}

fn has_traversal(value: &str) -> bool {
    value.split(['/', '\\']).any(|segment| segment == "..")
}

/// Resolve `.` and `..` segments without touching the filesystem.
///
/// Returns `None` when a `..` would climb above the first segment.
fn resolve_segments(value: &str) -> Option<Vec<&str>> {
    let mut resolved = Vec::new();
    for segment in value.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                resolved.pop()?;
            }
            other => resolved.push(other),
        }
    }
    Some(resolved)
}

fn is_inside(value: &str, tree: &str) -> bool {
    match (resolve_segments(value), resolve_segments(tree)) {
        (Some(path), Some(root)) => path.starts_with(&root),
        _ => false,
    }
}

/// Validate `value` as a `kind` path for the input named `label`.
pub fn validate_path(
    value: &str,
    label: &str,
    kind: PathKind,
    policy: &PathPolicy,
) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::failure(Diagnostic::new(
            DiagnosticKind::EmptyValueRejected,
            label,
            format!("{} path cannot be empty for input '{}'", kind, label),
        ));
    }
    if value.contains('\0') {
        return ValidationResult::failure(violation(
            label,
            format!("Invalid path for input '{}': contains a NUL byte", label),
        ));
    }
    if !policy.allow_traversal && has_traversal(value) {
        return ValidationResult::failure(violation(
            label,
            format!(
                "Invalid path '{}' for input '{}': '..' segments are not allowed",
                value, label
            ),
        ));
    }
    if is_absolute(value) {
        if !policy.allow_absolute {
            return ValidationResult::failure(violation(
                label,
                format!(
                    "Invalid path '{}' for input '{}': absolute paths are not allowed",
                    value, label
                ),
            ));
        }
        if let Some(tree) = &policy.working_tree
            && !is_inside(value, &tree.to_string_lossy())
        {
            return ValidationResult::failure(violation(
                label,
                format!(
                    "Invalid path '{}' for input '{}': must be inside {}",
                    value,
                    label,
                    tree.display()
                ),
            ));
        }
    }
    if kind == PathKind::File && (value.ends_with('/') || value.ends_with('\\')) {
        return ValidationResult::failure(violation(
            label,
            format!(
                "Invalid path '{}' for input '{}': a file path must not end with a separator",
                value, label
            ),
        ));
    }
    ValidationResult::success()
}
