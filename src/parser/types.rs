//! Shared types for module graph and manifest parsing.
//!
//! This module defines the data structures used to represent `go mod graph`
//! edges and the contents of a `go.mod` manifest.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between a module path and its version in an identifier.
pub const VERSION_SEPARATOR: char = '@';

/// Splits a module identifier into its bare name and version.
///
/// The split happens on the first `@`. Identifiers without a version
/// (the main module in `go mod graph` output) yield an empty version.
///
/// # Example
///
/// ```
/// use modconflict::parser::split_identifier;
///
/// assert_eq!(split_identifier("golang.org/x/text@v0.3.7"), ("golang.org/x/text", "v0.3.7"));
/// assert_eq!(split_identifier("example.com/app"), ("example.com/app", ""));
/// ```
pub fn split_identifier(id: &str) -> (&str, &str) {
    match id.split_once(VERSION_SEPARATOR) {
        Some((name, version)) => (name, version),
        None => (id, ""),
    }
}

/// One line of `go mod graph` output: `parent` requires `child`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Identifier of the requiring module.
    pub parent: String,
    /// Identifier of the required module.
    pub child: String,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            child: child.into(),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.parent, self.child)
    }
}

/// Represents the parts of a go.mod file relevant to dependency reporting.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GoMod {
    /// The module path declared by the `module` directive.
    pub module: Option<String>,

    /// The language version from the `go` directive.
    pub go_version: Option<String>,

    /// The toolchain from the `toolchain` directive.
    pub toolchain: Option<String>,

    /// Declared requirements, in file order.
    #[serde(default)]
    pub requires: Vec<Requirement>,

    /// Module replacements, in file order.
    #[serde(default)]
    pub replaces: Vec<Replacement>,

    /// Excluded module versions, in file order.
    #[serde(default)]
    pub excludes: Vec<Requirement>,
}

impl GoMod {
    /// Returns true if the manifest declares any requirements.
    pub fn has_requirements(&self) -> bool {
        !self.requires.is_empty()
    }

    /// Returns the requirements not marked `// indirect`.
    pub fn direct_requirements(&self) -> impl Iterator<Item = &Requirement> {
        self.requires.iter().filter(|r| !r.indirect)
    }

    /// Returns the requirements marked `// indirect`.
    pub fn indirect_requirements(&self) -> impl Iterator<Item = &Requirement> {
        self.requires.iter().filter(|r| r.indirect)
    }
}

/// A `require` (or `exclude`) line: module path plus version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Requirement {
    /// Module path (e.g., "github.com/pkg/errors")
    pub path: String,
    /// Version (e.g., "v0.9.1")
    pub version: String,
    /// Whether the line carries an `// indirect` comment
    #[serde(default)]
    pub indirect: bool,
}

impl Requirement {
    /// Creates a new direct requirement.
    pub fn new(path: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
            indirect: false,
        }
    }

    /// Creates a new requirement marked indirect.
    pub fn indirect(path: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            indirect: true,
            ..Self::new(path, version)
        }
    }

    /// Returns the `path@version` identifier used in `go mod graph` output.
    pub fn identifier(&self) -> String {
        format!("{}{}{}", self.path, VERSION_SEPARATOR, self.version)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.version)?;
        if self.indirect {
            write!(f, " // indirect")?;
        }
        Ok(())
    }
}

/// A `replace` directive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Replacement {
    /// The module path being replaced.
    pub old_path: String,
    /// Restricts the replacement to one version when present.
    pub old_version: Option<String>,
    /// Replacement module path or local directory.
    pub new_path: String,
    /// Replacement version; absent for local directories.
    pub new_version: Option<String>,
}

impl fmt::Display for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.old_path)?;
        if let Some(ref v) = self.old_version {
            write!(f, " {}", v)?;
        }
        write!(f, " => {}", self.new_path)?;
        if let Some(ref v) = self.new_version {
            write!(f, " {}", v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_identifier_with_version() {
        assert_eq!(
            split_identifier("github.com/pkg/errors@v0.9.1"),
            ("github.com/pkg/errors", "v0.9.1")
        );
    }

    #[test]
    fn test_split_identifier_first_separator_only() {
        assert_eq!(split_identifier("a@1@2"), ("a", "1@2"));
    }

    #[test]
    fn test_split_identifier_without_version() {
        assert_eq!(split_identifier("example.com/app"), ("example.com/app", ""));
    }

    #[test]
    fn test_edge_display() {
        let edge = Edge::new("a@1", "b@2");
        assert_eq!(edge.to_string(), "a@1 b@2");
    }

    #[test]
    fn test_requirement_identifier_and_display() {
        let req = Requirement::new("golang.org/x/sync", "v0.1.0");
        assert_eq!(req.identifier(), "golang.org/x/sync@v0.1.0");
        assert_eq!(req.to_string(), "golang.org/x/sync v0.1.0");

        let indirect = Requirement::indirect("golang.org/x/sys", "v0.5.0");
        assert!(indirect.indirect);
        assert_eq!(indirect.to_string(), "golang.org/x/sys v0.5.0 // indirect");
    }

    #[test]
    fn test_go_mod_direct_and_indirect() {
        let go_mod = GoMod {
            requires: vec![
                Requirement::new("a", "v1.0.0"),
                Requirement::indirect("b", "v2.0.0"),
                Requirement::new("c", "v3.0.0"),
            ],
            ..GoMod::default()
        };

        assert!(go_mod.has_requirements());
        assert_eq!(go_mod.direct_requirements().count(), 2);
        assert_eq!(go_mod.indirect_requirements().count(), 1);
    }

    #[test]
    fn test_replacement_display() {
        let local = Replacement {
            old_path: "example.com/lib".to_string(),
            old_version: None,
            new_path: "../lib".to_string(),
            new_version: None,
        };
        assert_eq!(local.to_string(), "example.com/lib => ../lib");

        let pinned = Replacement {
            old_path: "example.com/lib".to_string(),
            old_version: Some("v1.0.0".to_string()),
            new_path: "example.com/fork".to_string(),
            new_version: Some("v1.0.1".to_string()),
        };
        assert_eq!(
            pinned.to_string(),
            "example.com/lib v1.0.0 => example.com/fork v1.0.1"
        );
    }
}
