//! Tunable allow-lists and policies consulted by the grammars.
//!
//! Every field has a default, so a schema document only needs to carry the
//! settings it overrides:
//!
//! ```yaml
//! config:
//!   flexible_channels: [latest, stable, edge]
//!   path_policy:
//!     allow_absolute: false
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings shared by every grammar in one validation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Named channels accepted by the flexible version grammar.
    pub flexible_channels: Vec<String>,
    /// Provider prefixes a non-classic access token must start with.
    pub token_prefixes: Vec<String>,
    /// Minimum total length of a prefixed access token.
    pub token_min_length: usize,
    pub path_policy: PathPolicy,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        ValidatorConfig {
            flexible_channels: vec!["latest".to_string(), "stable".to_string()],
            token_prefixes: ["ghp_", "gho_", "ghu_", "ghs_", "ghr_", "github_pat_"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            token_min_length: 40,
            path_policy: PathPolicy::default(),
        }
    }
}

impl ValidatorConfig {
    pub fn is_flexible_channel(&self, value: &str) -> bool {
        self.flexible_channels.iter().any(|c| c == value)
    }
}

/// Shape policy for `file` and `directory` inputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathPolicy {
    /// Permit `..` segments.
    pub allow_traversal: bool,
    /// Permit absolute paths at all.
    pub allow_absolute: bool,
    /// When set, absolute paths must lie inside this tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_tree: Option<PathBuf>,
}

impl Default for PathPolicy {
    fn default() -> Self {
        PathPolicy {
            allow_traversal: false,
            allow_absolute: true,
            working_tree: None,
        }
    }
}
