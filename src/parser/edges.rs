//! Parser for `go mod graph` output.
//!
//! Each non-blank line holds two whitespace-separated module identifiers,
//! the requiring module first:
//!
//! ```text
//! example.com/app github.com/pkg/errors@v0.9.1
//! github.com/pkg/errors@v0.9.1 golang.org/x/text@v0.3.7
//! ```

use super::error::{ParseError, ParseResult};
use super::types::Edge;

/// Parses module graph text into edges, in line order.
///
/// Blank lines are skipped. The first line that does not split into
/// exactly two tokens aborts parsing with [`ParseError::Format`].
///
/// # Example
///
/// ```
/// use modconflict::parser::parse_edges;
///
/// let edges = parse_edges("a@1 b@1\n\na@1 c@1\n").unwrap();
/// assert_eq!(edges.len(), 2);
/// assert_eq!(edges[1].child, "c@1");
///
/// assert!(parse_edges("a@1\n").is_err());
/// ```
pub fn parse_edges(content: &str) -> ParseResult<Vec<Edge>> {
    let mut edges = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        edges.push(parse_line(i + 1, line)?);
    }

    Ok(edges)
}

fn parse_line(line_number: usize, line: &str) -> ParseResult<Edge> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(parent), Some(child), None) => Ok(Edge::new(parent, child)),
        _ => Err(ParseError::Format {
            line: line_number,
            content: line.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edges_in_order() {
        let edges = parse_edges("a@1 b@1\na@1 c@1\nb@1 c@2").unwrap();
        assert_eq!(
            edges,
            vec![
                Edge::new("a@1", "b@1"),
                Edge::new("a@1", "c@1"),
                Edge::new("b@1", "c@2"),
            ]
        );
    }

    #[test]
    fn test_parse_edges_empty_input() {
        assert!(parse_edges("").unwrap().is_empty());
        assert!(parse_edges("\n   \n\t\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_edges_skips_blank_lines_and_tolerates_spacing() {
        let edges = parse_edges("\n  a@1   b@1  \r\n\n").unwrap();
        assert_eq!(edges, vec![Edge::new("a@1", "b@1")]);
    }

    #[test]
    fn test_parse_edges_real_go_output() {
        let output = "example.com/app github.com/pkg/errors@v0.9.1\n\
                      example.com/app go@1.21\n\
                      github.com/pkg/errors@v0.9.1 golang.org/x/text@v0.3.7\n";
        let edges = parse_edges(output).unwrap();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0].parent, "example.com/app");
        assert_eq!(edges[2].child, "golang.org/x/text@v0.3.7");
    }

    #[test]
    fn test_parse_edges_single_token_is_format_error() {
        let err = parse_edges("a@1 b@1\na@1\n").unwrap_err();
        match err {
            ParseError::Format { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "a@1");
            }
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_edges_three_tokens_is_format_error() {
        let result = parse_edges("a@1 b@1 c@1");
        assert!(matches!(result, Err(ParseError::Format { line: 1, .. })));
    }
}
