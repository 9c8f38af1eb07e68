//! Built-in action schemas, embedded at compile time.

use crate::error::ActionError;
use crate::parse::parse_schema;
use crate::types::ActionSchema;

/// A registry entry mapping an action identifier to its schema document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionEntry {
    pub id: &'static str,
    pub schema: &'static str,
}

pub static ACTION_REGISTRY: &[ActionEntry] = &[
    ActionEntry {
        id: "docker-build",
        schema: include_str!("../actions/docker-build.yaml"),
    },
    ActionEntry {
        id: "docker-publish",
        schema: include_str!("../actions/docker-publish.yaml"),
    },
    ActionEntry {
        id: "go-build",
        schema: include_str!("../actions/go-build.yaml"),
    },
    ActionEntry {
        id: "go-lint",
        schema: include_str!("../actions/go-lint.yaml"),
    },
    ActionEntry {
        id: "php-tests",
        schema: include_str!("../actions/php-tests.yaml"),
    },
    ActionEntry {
        id: "python-lint-fix",
        schema: include_str!("../actions/python-lint-fix.yaml"),
    },
    ActionEntry {
        id: "terraform-lint-fix",
        schema: include_str!("../actions/terraform-lint-fix.yaml"),
    },
    ActionEntry {
        id: "version-validator",
        schema: include_str!("../actions/version-validator.yaml"),
    },
    ActionEntry {
        id: "version-file-parser",
        schema: include_str!("../actions/version-file-parser.yaml"),
    },
    ActionEntry {
        id: "pr-lint",
        schema: include_str!("../actions/pr-lint.yaml"),
    },
];

pub fn lookup_action(id: &str) -> Option<&'static ActionEntry> {
    ACTION_REGISTRY.iter().find(|e| e.id == id)
}

pub fn action_ids() -> impl Iterator<Item = &'static str> {
    ACTION_REGISTRY.iter().map(|e| e.id)
}

/// Resolve and parse the schema of a built-in action.
pub fn load_action(id: &str) -> Result<ActionSchema, ActionError> {
    let entry = lookup_action(id).ok_or_else(|| ActionError::UnknownAction(id.to_string()))?;
    let schema = parse_schema(entry.schema)?;
    Ok(schema)
}
