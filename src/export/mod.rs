//! Report rendering for conflict analysis results.
//!
//! This module provides exporters for the results of one run: the
//! manifest's declared requirements, version conflicts with their paths,
//! why explanations and dependency cycles. Formats: plain text (the
//! default terminal report), JSON and Markdown.

pub mod json;
pub mod markdown;
pub mod text;

use crate::analysis::{Analysis, Explanation};
use crate::graph::{CycleInfo, PathMode, VersionConflict, WalkStats};
use crate::parser::GoMod;
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Plain text - terminal report
    #[default]
    Text,
    /// JSON format - machine-readable, full data
    Json,
    /// Markdown format - documentation/reporting
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Graph-derived part of a report.
#[derive(Debug, Clone)]
pub struct GraphSummary {
    /// Root identifier of the graph
    pub root_module: Option<String>,
    /// Number of distinct module versions in the graph
    pub module_count: usize,
    /// Detected version conflicts
    pub conflicts: Vec<VersionConflict>,
    /// Why explanations, one per conflict
    pub explanations: Vec<Explanation>,
    /// Detected dependency cycles
    pub cycles: Vec<CycleInfo>,
    /// How paths were recorded
    pub path_mode: PathMode,
    /// Counters of the path walk
    pub walk: WalkStats,
    /// Per-module visit limit of the walk
    pub visit_limit: usize,
}

impl GraphSummary {
    /// Summarizes an analysis together with its why explanations.
    pub fn new(analysis: &Analysis, explanations: Vec<Explanation>) -> Self {
        Self {
            root_module: analysis.root_module().map(str::to_string),
            module_count: analysis.graph.node_count(),
            conflicts: analysis.conflicts.conflicts().to_vec(),
            explanations,
            cycles: analysis.cycles.clone(),
            path_mode: analysis.paths.mode(),
            walk: analysis.walk,
            visit_limit: analysis.graph.visit_limit(),
        }
    }
}

/// Data container for export operations.
///
/// Either part may be missing when its input could not be read; the
/// exporters then leave that section out.
#[derive(Debug, Clone, Default)]
pub struct ExportData {
    /// Parsed go.mod, if it could be read
    pub manifest: Option<GoMod>,
    /// Analysis results, if the module graph could be read
    pub graph: Option<GraphSummary>,
}

impl ExportData {
    /// Create export data from the available results.
    pub fn new(manifest: Option<GoMod>, graph: Option<GraphSummary>) -> Self {
        Self { manifest, graph }
    }

    /// Name to title the report with.
    pub fn project_name(&self) -> &str {
        self.manifest
            .as_ref()
            .and_then(|m| m.module.as_deref())
            .or_else(|| self.graph.as_ref().and_then(|g| g.root_module.as_deref()))
            .unwrap_or("unknown module")
    }

    /// Get count of conflicting modules
    pub fn conflict_count(&self) -> usize {
        self.graph.as_ref().map_or(0, |g| g.conflicts.len())
    }

    /// Get count of dependency cycles
    pub fn cycle_count(&self) -> usize {
        self.graph.as_ref().map_or(0, |g| g.cycles.len())
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the data to the given writer.
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()>;
}

/// Export data in the specified format.
///
/// `color` only affects the text format.
pub fn export<W: Write>(
    format: ExportFormat,
    data: &ExportData,
    color: bool,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Text => text::TextExporter::new(color).export(data, writer),
        ExportFormat::Json => json::JsonExporter.export(data, writer),
        ExportFormat::Markdown => markdown::MarkdownExporter.export(data, writer),
    }
}

/// Export data to a string, without color.
pub fn export_to_string(format: ExportFormat, data: &ExportData) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, data, false, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
