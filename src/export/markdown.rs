//! Markdown export implementation.
//!
//! Exports conflict analysis results in Markdown format for documentation and reporting.

use super::{ExportData, Exporter};
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        // Title
        writeln!(writer, "# Module Conflict Report")?;
        writeln!(writer)?;
        writeln!(writer, "**Module:** `{}`", data.project_name())?;
        if let Some(go_version) = data.manifest.as_ref().and_then(|m| m.go_version.as_ref()) {
            writeln!(writer, "**Go:** {}", go_version)?;
        }
        writeln!(writer)?;

        // Summary section
        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Metric | Count |")?;
        writeln!(writer, "|--------|-------|")?;
        if let Some(manifest) = &data.manifest {
            writeln!(
                writer,
                "| Direct Requirements | {} |",
                manifest.direct_requirements().count()
            )?;
            writeln!(
                writer,
                "| Indirect Requirements | {} |",
                manifest.indirect_requirements().count()
            )?;
        }
        if let Some(graph) = &data.graph {
            writeln!(writer, "| Modules in Graph | {} |", graph.module_count)?;
        }
        writeln!(writer, "| Version Conflicts | {} |", data.conflict_count())?;
        writeln!(writer, "| Dependency Cycles | {} |", data.cycle_count())?;
        writeln!(writer)?;

        if let Some(manifest) = &data.manifest {
            // Requirements
            if manifest.has_requirements() {
                writeln!(writer, "## Requirements")?;
                writeln!(writer)?;
                writeln!(writer, "| Module | Version | Indirect |")?;
                writeln!(writer, "|--------|---------|----------|")?;
                for req in &manifest.requires {
                    writeln!(
                        writer,
                        "| {} | {} | {} |",
                        req.path,
                        req.version,
                        if req.indirect { "yes" } else { "" }
                    )?;
                }
                writeln!(writer)?;
            }

            if !manifest.replaces.is_empty() {
                writeln!(writer, "## Replacements")?;
                writeln!(writer)?;
                for replacement in &manifest.replaces {
                    writeln!(writer, "- `{}`", replacement)?;
                }
                writeln!(writer)?;
            }

            if !manifest.excludes.is_empty() {
                writeln!(writer, "## Exclusions")?;
                writeln!(writer)?;
                for exclusion in &manifest.excludes {
                    writeln!(writer, "- `{}`", exclusion)?;
                }
                writeln!(writer)?;
            }
        }

        if let Some(graph) = &data.graph {
            // Version conflicts
            writeln!(writer, "## Version Conflicts")?;
            writeln!(writer)?;
            if graph.conflicts.is_empty() {
                writeln!(writer, "No version conflicts were found.")?;
                writeln!(writer)?;
            }

            for conflict in &graph.conflicts {
                writeln!(writer, "### {}", conflict.package_name)?;
                writeln!(writer)?;
                writeln!(writer, "Versions: {}", conflict.versions.join(", "))?;
                writeln!(writer)?;
                for path in conflict.rendered_paths() {
                    writeln!(writer, "- `{}`", path)?;
                }
                writeln!(writer)?;

                let explanation = graph
                    .explanations
                    .iter()
                    .find(|e| e.package_name == conflict.package_name);
                if let Some(explanation) = explanation {
                    writeln!(writer, "Why is it needed?")?;
                    writeln!(writer)?;
                    writeln!(writer, "```")?;
                    match &explanation.error {
                        Some(error) => writeln!(writer, "(error: {})", error)?,
                        None => {
                            for line in &explanation.lines {
                                writeln!(writer, "{}", line)?;
                            }
                        }
                    }
                    writeln!(writer, "```")?;
                    writeln!(writer)?;
                }
            }

            // Cycles
            if !graph.cycles.is_empty() {
                writeln!(writer, "## Dependency Cycles")?;
                writeln!(writer)?;
                for (i, cycle) in graph.cycles.iter().enumerate() {
                    write!(writer, "{}. `{}`", i + 1, cycle.cycle_path())?;
                    if cycle.has_more_members() {
                        write!(writer, " within `{}`", cycle.component())?;
                    }
                    writeln!(writer)?;
                }
                writeln!(writer)?;
            }

            if graph.walk.is_truncated() {
                writeln!(
                    writer,
                    "> **Note:** the path walk skipped {} repeated visits (limit {} per module); some paths are not listed.",
                    graph.walk.truncated, graph.visit_limit
                )?;
                writeln!(writer)?;
            }
        }

        // Footer
        writeln!(writer, "---")?;
        writeln!(writer, "*Generated by modconflict*")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    fn render(data: &ExportData) -> String {
        let mut buffer = Vec::new();
        MarkdownExporter.export(data, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_markdown_export() {
        let output = render(&sample_data());

        assert!(output.contains("# Module Conflict Report"));
        assert!(output.contains("**Module:** `example.com/app`"));
        assert!(output.contains("| Direct Requirements | 1 |"));
        assert!(output.contains("| Indirect Requirements | 1 |"));
        assert!(output.contains("| Modules in Graph | 4 |"));
        assert!(output.contains("| Version Conflicts | 1 |"));
        assert!(output.contains("| c | v1 | yes |"));
        assert!(output.contains("*Generated by modconflict*"));
    }

    #[test]
    fn test_markdown_conflict_section() {
        let output = render(&sample_data());

        assert!(output.contains("### c\n\nVersions: 1, 2\n"));
        assert!(output.contains("- `a@1 -> b@1 -> c@1`\n- `a@1 -> c@2`\n"));
        assert!(output.contains("Why is it needed?\n\n```\na\nc\n```\n"));
        assert!(!output.contains("## Dependency Cycles"));
    }

    #[test]
    fn test_markdown_no_conflicts_with_cycle() {
        let mut data = clean_data();
        data.graph.as_mut().unwrap().cycles.push(component_cycle());

        let output = render(&data);
        assert!(output.contains("No version conflicts were found."));
        assert!(output.contains("1. `x@1 -> y@1 -> x@1` within `{x@1, y@1, z@1}`\n"));
        assert!(!output.contains("## Requirements"));
        assert!(!output.contains("**Note:**"));
    }

    #[test]
    fn test_markdown_replace_and_exclude_without_requirements() {
        let data = ExportData::new(Some(directives_manifest()), None);
        let output = render(&data);

        assert!(!output.contains("## Requirements"));
        assert!(output.contains("## Replacements\n\n- `b v1 => ../b`\n"));
        assert!(output.contains("## Exclusions\n\n- `c v0.1.0`\n"));
    }

    #[test]
    fn test_markdown_truncated_walk_note() {
        let mut data = clean_data();
        data.graph.as_mut().unwrap().walk.truncated = 5;

        let output = render(&data);
        assert!(output.contains("skipped 5 repeated visits (limit 64 per module)"));
    }
}
