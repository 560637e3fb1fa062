//! Parser for go.mod manifests.
//!
//! Reads the module path, `go`/`toolchain` directives, and the
//! `require`, `replace` and `exclude` directives in both their single-line
//! and parenthesized block forms. Other directives (`retract`, `godebug`,
//! `tool`, ...) are accepted and skipped.

use std::fs;
use std::io;
use std::path::Path;

use super::error::{ParseError, ParseResult};
use super::types::{GoMod, Replacement, Requirement};

/// File name of the module manifest.
pub const GO_MOD_FILE: &str = "go.mod";

/// Parses a go.mod file from a file path.
///
/// A missing file is reported as [`ParseError::NotFound`] so callers can
/// tell it apart from an unreadable one.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use modconflict::parser::go_mod::parse_file;
///
/// let go_mod = parse_file(Path::new("go.mod")).unwrap();
/// println!("Module Path: {:?}", go_mod.module);
/// ```
pub fn parse_file(path: &Path) -> ParseResult<GoMod> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ParseError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(e.into()),
    };
    parse_str(&content)
}

/// Parses go.mod content from a string.
///
/// # Example
///
/// ```
/// use modconflict::parser::go_mod::parse_str;
///
/// let go_mod = parse_str(
///     "module example.com/app\n\ngo 1.21\n\nrequire github.com/pkg/errors v0.9.1\n",
/// )
/// .unwrap();
/// assert_eq!(go_mod.module.as_deref(), Some("example.com/app"));
/// assert_eq!(go_mod.requires.len(), 1);
/// ```
pub fn parse_str(content: &str) -> ParseResult<GoMod> {
    let mut go_mod = GoMod::default();
    // Verb and opening line of the block currently being read
    let mut block: Option<(String, usize)> = None;

    for (i, raw) in content.lines().enumerate() {
        let line = i + 1;
        let (code, comment) = split_comment(raw);
        let code = code.trim();
        if code.is_empty() {
            continue;
        }

        if block.is_some() && code == ")" {
            block = None;
            continue;
        }

        if let Some((verb, _)) = &block {
            apply_directive(&mut go_mod, verb, code, comment, line)?;
            continue;
        }

        if let Some(verb) = code.strip_suffix('(') {
            let verb = verb.trim();
            if verb.is_empty() || verb.contains(char::is_whitespace) {
                return Err(invalid(line, "unexpected `(`"));
            }
            block = Some((verb.to_string(), line));
            continue;
        }

        let Some((verb, args)) = code.split_once(char::is_whitespace) else {
            return Err(invalid(
                line,
                format!("directive `{code}` has no arguments"),
            ));
        };
        apply_directive(&mut go_mod, verb, args.trim(), comment, line)?;
    }

    if let Some((verb, line)) = block {
        return Err(invalid(line, format!("unterminated `{verb} (` block")));
    }

    Ok(go_mod)
}

fn apply_directive(
    go_mod: &mut GoMod,
    verb: &str,
    args: &str,
    comment: Option<&str>,
    line: usize,
) -> ParseResult<()> {
    let tokens: Vec<&str> = args.split_whitespace().map(unquote).collect();

    match verb {
        "module" => go_mod.module = Some(single_arg(verb, &tokens, line)?),
        "go" => go_mod.go_version = Some(single_arg(verb, &tokens, line)?),
        "toolchain" => go_mod.toolchain = Some(single_arg(verb, &tokens, line)?),
        "require" | "exclude" => {
            let [path, version] = tokens.as_slice() else {
                return Err(invalid(
                    line,
                    format!("`{verb}` expects a module path and a version"),
                ));
            };
            let requirement = Requirement {
                path: path.to_string(),
                version: version.to_string(),
                indirect: is_indirect(comment),
            };
            if verb == "require" {
                go_mod.requires.push(requirement);
            } else {
                go_mod.excludes.push(requirement);
            }
        }
        "replace" => go_mod.replaces.push(parse_replacement(&tokens, line)?),
        other => {
            tracing::debug!(directive = other, line, "skipping go.mod directive");
        }
    }

    Ok(())
}

fn parse_replacement(tokens: &[&str], line: usize) -> ParseResult<Replacement> {
    let Some(arrow) = tokens.iter().position(|t| *t == "=>") else {
        return Err(invalid(line, "`replace` is missing `=>`"));
    };
    let (old, new) = (&tokens[..arrow], &tokens[arrow + 1..]);

    let (old_path, old_version) = match old {
        [path] => (path, None),
        [path, version] => (path, Some(version.to_string())),
        _ => return Err(invalid(line, "`replace` expects `path [version]` before `=>`")),
    };
    let (new_path, new_version) = match new {
        [path] => (path, None),
        [path, version] => (path, Some(version.to_string())),
        _ => return Err(invalid(line, "`replace` expects `path [version]` after `=>`")),
    };

    Ok(Replacement {
        old_path: old_path.to_string(),
        old_version,
        new_path: new_path.to_string(),
        new_version,
    })
}

fn single_arg(verb: &str, tokens: &[&str], line: usize) -> ParseResult<String> {
    match tokens {
        [value] => Ok(value.to_string()),
        _ => Err(invalid(line, format!("`{verb}` expects exactly one argument"))),
    }
}

/// Splits a line into code and the text of a trailing `//` comment.
fn split_comment(line: &str) -> (&str, Option<&str>) {
    match line.find("//") {
        Some(pos) => (&line[..pos], Some(&line[pos + 2..])),
        None => (line, None),
    }
}

fn is_indirect(comment: Option<&str>) -> bool {
    comment.is_some_and(|c| {
        let c = c.trim();
        c == "indirect" || c.starts_with("indirect;")
    })
}

fn unquote(token: &str) -> &str {
    for quote in ['"', '`'] {
        if let Some(inner) = token
            .strip_prefix(quote)
            .and_then(|t| t.strip_suffix(quote))
        {
            return inner;
        }
    }
    token
}

fn invalid(line: usize, message: impl Into<String>) -> ParseError {
    ParseError::InvalidManifest {
        line,
        message: message.into(),
    }
}
