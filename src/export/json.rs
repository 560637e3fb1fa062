//! JSON export implementation.
//!
//! Exports conflict analysis results in JSON format for machine-readable output.

use super::{ExportData, Exporter};
use crate::graph::VersionConflict;
use crate::parser::{GoMod, Replacement, Requirement};
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Project info for JSON output.
#[derive(Serialize)]
struct JsonProject {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    go_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    toolchain: Option<String>,
}

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    requirements: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    modules: Option<usize>,
    version_conflicts: usize,
    dependency_cycles: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    path_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    skipped_repeat_visits: Option<usize>,
}

/// Serializable requirement for JSON output.
#[derive(Serialize)]
struct JsonRequirement {
    path: String,
    version: String,
    indirect: bool,
}

impl From<&Requirement> for JsonRequirement {
    fn from(r: &Requirement) -> Self {
        Self {
            path: r.path.clone(),
            version: r.version.clone(),
            indirect: r.indirect,
        }
    }
}

/// Serializable replace directive for JSON output.
#[derive(Serialize)]
struct JsonReplacement {
    old_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    old_version: Option<String>,
    new_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_version: Option<String>,
}

impl From<&Replacement> for JsonReplacement {
    fn from(r: &Replacement) -> Self {
        Self {
            old_path: r.old_path.clone(),
            old_version: r.old_version.clone(),
            new_path: r.new_path.clone(),
            new_version: r.new_version.clone(),
        }
    }
}

/// Serializable exclude directive for JSON output.
#[derive(Serialize)]
struct JsonExclusion {
    path: String,
    version: String,
}

/// Serializable version conflict for JSON output.
#[derive(Serialize)]
struct JsonVersionConflict {
    package: String,
    versions: Vec<String>,
    paths: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    why: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    why_error: Option<String>,
}

/// Serializable cycle info for JSON output.
#[derive(Serialize)]
struct JsonCycle {
    modules: Vec<String>,
    component: Vec<String>,
    path: String,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport {
    project: JsonProject,
    summary: JsonSummary,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    requirements: Vec<JsonRequirement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    replacements: Vec<JsonReplacement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    exclusions: Vec<JsonExclusion>,
    version_conflicts: Vec<JsonVersionConflict>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dependency_cycles: Vec<JsonCycle>,
}

fn json_conflict(conflict: &VersionConflict, data: &ExportData) -> JsonVersionConflict {
    let explanation = data.graph.as_ref().and_then(|g| {
        g.explanations
            .iter()
            .find(|e| e.package_name == conflict.package_name)
    });

    JsonVersionConflict {
        package: conflict.package_name.clone(),
        versions: conflict.versions.clone(),
        paths: conflict.rendered_paths(),
        why: explanation
            .filter(|e| e.error.is_none())
            .map(|e| e.lines.clone()),
        why_error: explanation.and_then(|e| e.error.clone()),
    }
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let manifest = data.manifest.as_ref();

        let requirements: Vec<JsonRequirement> = manifest
            .map(|m: &GoMod| m.requires.iter().map(JsonRequirement::from).collect())
            .unwrap_or_default();

        let replacements: Vec<JsonReplacement> = manifest
            .map(|m| m.replaces.iter().map(JsonReplacement::from).collect())
            .unwrap_or_default();

        let exclusions: Vec<JsonExclusion> = manifest
            .map(|m| {
                m.excludes
                    .iter()
                    .map(|e| JsonExclusion {
                        path: e.path.clone(),
                        version: e.version.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let version_conflicts: Vec<JsonVersionConflict> = data
            .graph
            .iter()
            .flat_map(|g| g.conflicts.iter())
            .map(|c| json_conflict(c, data))
            .collect();

        let dependency_cycles: Vec<JsonCycle> = data
            .graph
            .iter()
            .flat_map(|g| g.cycles.iter())
            .map(|c| JsonCycle {
                modules: c.nodes.clone(),
                component: c.members.clone(),
                path: c.cycle_path(),
            })
            .collect();

        let export = JsonExport {
            project: JsonProject {
                name: data.project_name().to_string(),
                go_version: manifest.and_then(|m| m.go_version.clone()),
                toolchain: manifest.and_then(|m| m.toolchain.clone()),
            },
            summary: JsonSummary {
                requirements: manifest.map(|m| m.requires.len()),
                modules: data.graph.as_ref().map(|g| g.module_count),
                version_conflicts: data.conflict_count(),
                dependency_cycles: data.cycle_count(),
                path_mode: data.graph.as_ref().map(|g| g.path_mode.to_string()),
                skipped_repeat_visits: data
                    .graph
                    .as_ref()
                    .map(|g| g.walk.truncated)
                    .filter(|&n| n > 0),
            },
            requirements,
            replacements,
            exclusions,
            version_conflicts,
            dependency_cycles,
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
