//! [`ModuleSource`] backed by the `go` command.

use std::process::Command;

use super::{ModuleSource, SourceError, SourceResult};

/// Runs `go mod graph` and `go mod why -m` in the current directory.
#[derive(Debug, Clone)]
pub struct GoCli {
    program: String,
}

impl Default for GoCli {
    fn default() -> Self {
        Self::new("go")
    }
}

impl GoCli {
    /// Creates a source that invokes `program` as the go binary.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Returns the program this source invokes.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Runs the program with `args` and returns its standard output.
    fn exec(&self, args: &[&str]) -> SourceResult<String> {
        let command = format!("{} {}", self.program, args.join(" "));
        tracing::debug!(%command, "running");

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| SourceError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SourceError::CommandFailed {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl ModuleSource for GoCli {
    fn module_graph(&self) -> SourceResult<String> {
        self.exec(&["mod", "graph"])
    }

    fn why(&self, module: &str) -> SourceResult<Vec<String>> {
        let output = self.exec(&["mod", "why", "-m", module])?;
        Ok(parse_why_output(&output))
    }
}

/// Extracts the explanation chain from `go mod why` output.
///
/// Blank lines and `# module` headers are dropped. Parenthesized notes such
/// as `(main module does not need module X)` are kept whole; any other line
/// is reduced to its first token.
///
/// # Example
///
/// ```
/// use modconflict::source::parse_why_output;
///
/// let lines = parse_why_output("# golang.org/x/text\nexample.com/app\ngolang.org/x/text\n");
/// assert_eq!(lines, vec!["example.com/app", "golang.org/x/text"]);
/// ```
pub fn parse_why_output(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            if line.starts_with('(') {
                Some(line.to_string())
            } else {
                line.split_whitespace().next().map(str::to_string)
            }
        })
        .collect()
}
