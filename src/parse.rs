use crate::enums::TypeTag;
use crate::error::{SchemaError, SchemaErrorKind};
use crate::types::ActionSchema;

/// Parse a YAML rule-schema document into an [`ActionSchema`].
///
/// Performs YAML deserialization, type mapping and rule consistency checks.
/// Does NOT validate any inputs.
pub fn parse_schema(input: &str) -> Result<ActionSchema, SchemaError> {
    if input.trim().is_empty() {
        return Err(SchemaError {
            kind: SchemaErrorKind::Syntax,
            message: "empty input".to_string(),
            path: None,
        });
    }

    check_multi_document(input)?;

    // YAML → serde_json::Value → ActionSchema, so that map order is kept and
    // type errors come out of one deserializer.
    let value: serde_json::Value = serde_saphyr::from_str(input).map_err(|e| {
        let msg = e.to_string();
        SchemaError {
            kind: classify_saphyr_error(&msg),
            message: msg,
            path: None,
        }
    })?;

    let Some(obj) = value.as_object() else {
        return Err(SchemaError {
            kind: SchemaErrorKind::TypeMismatch,
            message: "document root must be a YAML mapping".to_string(),
            path: None,
        });
    };

    for key in obj.keys() {
        match key.as_str() {
            "action" | "description" | "config" | "inputs" => {}
            other => {
                return Err(SchemaError {
                    kind: SchemaErrorKind::TypeMismatch,
                    message: format!("unknown top-level field: {}", other),
                    path: Some(other.to_string()),
                });
            }
        }
    }

    let schema: ActionSchema = serde_json::from_value(value).map_err(|e| {
        let msg = e.to_string();
        SchemaError {
            kind: classify_json_error(&msg),
            message: msg,
            path: None,
        }
    })?;

    check_rules(&schema)?;

    Ok(schema)
}

/// Rule combinations serde alone cannot reject.
fn check_rules(schema: &ActionSchema) -> Result<(), SchemaError> {
    if schema.action.trim().is_empty() {
        return Err(SchemaError {
            kind: SchemaErrorKind::InvalidRule,
            message: "action identifier must not be empty".to_string(),
            path: Some("action".to_string()),
        });
    }

    for (name, rule) in schema.inputs.iter() {
        if name.trim().is_empty() {
            return Err(SchemaError {
                kind: SchemaErrorKind::InvalidRule,
                message: "input names must not be empty".to_string(),
                path: Some("inputs".to_string()),
            });
        }
        if let Some(allowed) = &rule.allowed {
            if rule.type_tag != TypeTag::String {
                return Err(SchemaError {
                    kind: SchemaErrorKind::InvalidRule,
                    message: format!(
                        "'allowed' only applies to string inputs, not {}",
                        rule.type_tag
                    ),
                    path: Some(format!("inputs.{}.allowed", name)),
                });
            }
            if allowed.is_empty() {
                return Err(SchemaError {
                    kind: SchemaErrorKind::InvalidRule,
                    message: "'allowed' must list at least one value".to_string(),
                    path: Some(format!("inputs.{}.allowed", name)),
                });
            }
        }
    }
    Ok(())
}

/// Check for multiple YAML documents (--- separator).
/// Only matches `---` at column 0 to avoid false positives inside block scalars.
fn check_multi_document(input: &str) -> Result<(), SchemaError> {
    let mut doc_count = 0;
    for line in input.lines() {
        if line.starts_with("---") && line[3..].trim().is_empty() {
            doc_count += 1;
            if doc_count > 1 {
                return Err(SchemaError {
                    kind: SchemaErrorKind::Syntax,
                    message: "multi-document YAML is not supported".to_string(),
                    path: None,
                });
            }
        }
    }
    Ok(())
}

fn classify_saphyr_error(msg: &str) -> SchemaErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("unknown") || lower.contains("variant") {
        SchemaErrorKind::UnknownVariant
    } else if lower.contains("type") || lower.contains("invalid") || lower.contains("expected") {
        SchemaErrorKind::TypeMismatch
    } else {
        SchemaErrorKind::Syntax
    }
}

fn classify_json_error(msg: &str) -> SchemaErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("unknown variant") || lower.contains("unknown field") {
        SchemaErrorKind::UnknownVariant
    } else if lower.contains("missing field") || lower.contains("invalid type") {
        SchemaErrorKind::TypeMismatch
    } else {
        SchemaErrorKind::Syntax
    }
}
