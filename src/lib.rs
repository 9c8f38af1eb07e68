//! Input validation for CI action wrappers.
//!
//! Every action declares its inputs in a small YAML rule schema. Before any
//! real work runs, the action hands its raw string inputs to this crate and
//! gets back one verdict with every problem found:
//!
//! ```text
//! action id → registry → parse_schema(yaml) → ActionSchema
//!                                            → validate_schema(schema, inputs) → ValidationResult
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! let mut inputs = HashMap::new();
//! inputs.insert("language".to_string(), "cobol".to_string());
//!
//! let result = action_validator::validate_action("version-file-parser", &inputs)
//!     .expect("built-in action");
//! assert!(!result.is_valid());
//! for message in result.messages() {
//!     println!("{}", message);
//! }
//! ```
//!
//! # Grammars
//!
//! | Type tag | Checked by |
//! |----------|------------|
//! | `go_version`, `php_version`, `python_version`, `terraform_version`, `flexible_version` | [`version::validate_version`] |
//! | `docker_image_name` | [`image::validate_image_name`] |
//! | `email` | [`contact::validate_email`] |
//! | `github_token` | [`contact::validate_token`] |
//! | `file`, `directory` | [`path::validate_path`] |
//! | `string` | passes, unless the rule lists `allowed` values |

pub mod collector;
pub mod config;
pub mod contact;
pub mod enums;
pub mod error;
pub mod image;
pub mod parse;
pub mod path;
pub mod registry;
pub mod types;
pub mod validate;
pub mod version;

pub use collector::ErrorCollector;
pub use config::{PathPolicy, ValidatorConfig};
pub use error::*;
pub use types::*;

// Re-export entry-point functions at the crate root for convenience.
pub use parse::parse_schema;
pub use registry::load_action;
pub use validate::{Dispatcher, validate, validate_schema};

/// Convenience entry point composing registry lookup → parse → validate.
///
/// # Errors
///
/// Returns `Err(ActionError)` if `action_id` is not a built-in action or its
/// schema fails to parse. Invalid inputs are not an error: they are reported
/// in the returned [`ValidationResult`].
pub fn validate_action(action_id: &str, inputs: &Inputs) -> Result<ValidationResult, ActionError> {
    let schema = registry::load_action(action_id)?;
    Ok(validate::validate_schema(&schema, inputs))
}
