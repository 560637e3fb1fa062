//! Plain text export, the default terminal report.

use super::{ExportData, Exporter};
use crossterm::style::Stylize;
use std::io::{self, Write};

/// Text exporter implementation.
pub struct TextExporter {
    color: bool,
}

impl TextExporter {
    /// Creates a text exporter; `color` highlights conflict headings in red.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn conflict_label(&self) -> String {
        if self.color {
            "Conflict".red().to_string()
        } else {
            "Conflict".to_string()
        }
    }
}

impl Exporter for TextExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        if let Some(manifest) = &data.manifest {
            writeln!(
                writer,
                "Module Path: {}",
                manifest.module.as_deref().unwrap_or("")
            )?;
            if let Some(go_version) = &manifest.go_version {
                writeln!(writer, "Go Version: {}", go_version)?;
            }
            if let Some(toolchain) = &manifest.toolchain {
                writeln!(writer, "Toolchain: {}", toolchain)?;
            }
            for requirement in &manifest.requires {
                writeln!(writer, "Require: {}", requirement)?;
            }
            for replacement in &manifest.replaces {
                writeln!(writer, "Replace: {}", replacement)?;
            }
            for exclusion in &manifest.excludes {
                writeln!(writer, "Exclude: {}", exclusion)?;
            }
        }

        let Some(graph) = &data.graph else {
            return Ok(());
        };

        if graph.conflicts.is_empty() {
            writeln!(writer, "there is no conflict in your project dependencies")?;
        }
        for conflict in &graph.conflicts {
            writeln!(
                writer,
                "{} in pkg {} paths are:",
                self.conflict_label(),
                conflict.package_name
            )?;
            for path in conflict.rendered_paths() {
                writeln!(writer, "\t{}", path)?;
            }
        }

        for explanation in &graph.explanations {
            writeln!(writer, "why pkg {} ? >>>", explanation.package_name)?;
            match &explanation.error {
                Some(error) => writeln!(writer, "\t(error: {})", error)?,
                None => {
                    for line in &explanation.lines {
                        writeln!(writer, "\t{}", line)?;
                    }
                }
            }
        }

        for cycle in &graph.cycles {
            write!(writer, "note: dependency cycle: {}", cycle.cycle_path())?;
            if cycle.has_more_members() {
                write!(writer, " (within {})", cycle.component())?;
            }
            writeln!(writer)?;
        }

        if graph.walk.is_truncated() {
            writeln!(
                writer,
                "note: path walk skipped {} repeated visits (limit {} per module); some paths are not listed",
                graph.walk.truncated, graph.visit_limit
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    fn render(exporter: &TextExporter, data: &ExportData) -> String {
        let mut buffer = Vec::new();
        exporter.export(data, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_text_report_layout() {
        let output = render(&TextExporter::new(false), &sample_data());
        let expected = "\
Module Path: example.com/app
Go Version: 1.21
Require: b v2
Require: c v1 // indirect
Conflict in pkg c paths are:
\ta@1 -> b@1 -> c@1
\ta@1 -> c@2
why pkg c ? >>>
\ta
\tc
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_text_no_conflicts() {
        let output = render(&TextExporter::new(false), &clean_data());
        assert_eq!(
            output,
            "there is no conflict in your project dependencies\n"
        );
    }

    #[test]
    fn test_text_manifest_only() {
        let data = ExportData::new(Some(sample_manifest()), None);
        let output = render(&TextExporter::new(false), &data);
        assert!(output.starts_with("Module Path: example.com/app\n"));
        assert!(!output.contains("conflict"));
    }

    #[test]
    fn test_text_why_error_and_cycles() {
        let mut data = sample_data();
        let graph = data.graph.as_mut().unwrap();
        graph.explanations[0].lines.clear();
        graph.explanations[0].error = Some("go: not found".to_string());
        graph.cycles.push(component_cycle());

        let output = render(&TextExporter::new(false), &data);
        assert!(output.contains("why pkg c ? >>>\n\t(error: go: not found)\n"));
        assert!(output.ends_with(
            "note: dependency cycle: x@1 -> y@1 -> x@1 (within {x@1, y@1, z@1})\n"
        ));
    }

    #[test]
    fn test_text_truncated_walk_note() {
        let mut data = clean_data();
        let graph = data.graph.as_mut().unwrap();
        graph.walk.truncated = 7;
        graph.visit_limit = 64;

        let output = render(&TextExporter::new(false), &data);
        assert!(output.ends_with(
            "note: path walk skipped 7 repeated visits (limit 64 per module); some paths are not listed\n"
        ));
        assert!(!render(&TextExporter::new(false), &clean_data()).contains("note:"));
    }

    #[test]
    fn test_text_replace_and_exclude() {
        let data = ExportData::new(Some(directives_manifest()), None);
        let output = render(&TextExporter::new(false), &data);
        assert_eq!(
            output,
            "Module Path: example.com/fork\nReplace: b v1 => ../b\nExclude: c v0.1.0\n"
        );
    }

    #[test]
    fn test_text_color_only_on_label() {
        let plain = render(&TextExporter::new(false), &sample_data());
        let colored = render(&TextExporter::new(true), &sample_data());
        assert!(!plain.contains('\u{1b}'));
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(colored.contains('\u{1b}'));
        }
        assert!(colored.contains("in pkg c paths are:"));
    }
}
