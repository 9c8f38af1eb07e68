//! Closed enumerations used by rule tables and diagnostics.
//!
//! Only the defined variants are valid; an unknown type tag in a rule schema
//! is a schema error, not a validation diagnostic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The type tag of a declared input. Selects the grammar the dispatcher runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTag {
    #[default]
    String,
    Directory,
    File,
    GoVersion,
    PhpVersion,
    PythonVersion,
    TerraformVersion,
    FlexibleVersion,
    DockerImageName,
    Email,
    GithubToken,
}

impl TypeTag {
    /// Every tag the dispatcher recognizes, in declaration order.
    pub const ALL: [TypeTag; 11] = [
        TypeTag::String,
        TypeTag::Directory,
        TypeTag::File,
        TypeTag::GoVersion,
        TypeTag::PhpVersion,
        TypeTag::PythonVersion,
        TypeTag::TerraformVersion,
        TypeTag::FlexibleVersion,
        TypeTag::DockerImageName,
        TypeTag::Email,
        TypeTag::GithubToken,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Directory => "directory",
            TypeTag::File => "file",
            TypeTag::GoVersion => "go_version",
            TypeTag::PhpVersion => "php_version",
            TypeTag::PythonVersion => "python_version",
            TypeTag::TerraformVersion => "terraform_version",
            TypeTag::FlexibleVersion => "flexible_version",
            TypeTag::DockerImageName => "docker_image_name",
            TypeTag::Email => "email",
            TypeTag::GithubToken => "github_token",
        }
    }

    /// The version ecosystem this tag selects, if it is a version tag.
    pub fn ecosystem(&self) -> Option<Ecosystem> {
        match self {
            TypeTag::GoVersion => Some(Ecosystem::Go),
            TypeTag::PhpVersion => Some(Ecosystem::Php),
            TypeTag::PythonVersion => Some(Ecosystem::Python),
            TypeTag::TerraformVersion => Some(Ecosystem::Terraform),
            TypeTag::FlexibleVersion => Some(Ecosystem::Flexible),
            _ => None,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Version string ecosystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ecosystem {
    Go,
    Php,
    Python,
    Terraform,
    Flexible,
}

impl Ecosystem {
    pub const ALL: [Ecosystem; 5] = [
        Ecosystem::Go,
        Ecosystem::Php,
        Ecosystem::Python,
        Ecosystem::Terraform,
        Ecosystem::Flexible,
    ];

    /// Human-readable name used in diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            Ecosystem::Go => "Go",
            Ecosystem::Php => "PHP",
            Ecosystem::Python => "Python",
            Ecosystem::Terraform => "Terraform",
            Ecosystem::Flexible => "flexible",
        }
    }

    /// Noun phrase naming a version of this ecosystem, e.g. "Go version".
    pub fn noun(&self) -> &'static str {
        match self {
            Ecosystem::Go => "Go version",
            Ecosystem::Php => "PHP version",
            Ecosystem::Python => "Python version",
            Ecosystem::Terraform => "Terraform version",
            Ecosystem::Flexible => "Version",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Recognized shape of a version specifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionShape {
    Exact,
    Constraint,
    Wildcard,
    Channel,
}

/// What a path input must name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathKind {
    File,
    Directory,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKind::File => f.write_str("File"),
            PathKind::Directory => f.write_str("Directory"),
        }
    }
}

/// Grammar family a mismatch was reported against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrammarKind {
    Version(Ecosystem),
    DockerImageName,
}

/// Contact-style format families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    Email,
    Token,
}
