//! Joining segments into the expression the matcher runs.

use crate::error::{CompileError, Result};
use crate::segment::Segment;
use regex::Regex;

/// The assembled expression, compiled for search and for full matches.
#[derive(Debug, Clone)]
pub(crate) struct Assembled {
    pub source: String,
    pub search: Regex,
    pub full: Regex,
}

/// Source text of the expression: literals verbatim, placeholders wrapped
/// in a capturing group.
fn source(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        segment.push_source(&mut out);
    }
    out
}

pub(crate) fn assemble(segments: &[Segment]) -> Result<Assembled> {
    // Unbalanced sub-patterns can pair up through the group wrappers and
    // still compile, with every later index off.
    if let Some(error) = malformed_placeholder(segments) {
        return Err(error);
    }

    let source = source(segments);
    tracing::debug!(pattern = %source, "assembled template regex");

    let search = Regex::new(&source).map_err(|e| build_error(&source, e))?;
    let full = full_match(&source).map_err(|e| build_error(&source, e))?;

    Ok(Assembled {
        source,
        search,
        full,
    })
}

/// Anchor `source` at both ends. The wrapper is non-capturing, so group
/// indices are unchanged.
fn full_match(source: &str) -> std::result::Result<Regex, regex::Error> {
    Regex::new(&format!(r"\A(?:{})\z", source)).or_else(|e| {
        // A trailing `#` comment under `(?x)` swallows the closing paren.
        // The newline ends the comment and is ignored as verbose whitespace.
        Regex::new(&format!("\\A(?:{}\n)\\z", source)).map_err(|_| e)
    })
}

/// The first placeholder whose own pattern is invalid, as an error.
fn malformed_placeholder(segments: &[Segment]) -> Option<CompileError> {
    segments
        .iter()
        .filter(|s| s.is_placeholder() && s.group_count().is_none())
        .find_map(|s| {
            let error = Regex::new(s.body()).err()?;
            Some(CompileError::Placeholder {
                name: s.name().unwrap_or_default().to_string(),
                pattern: s.body().to_string(),
                source: error,
            })
        })
}

fn build_error(source: &str, error: regex::Error) -> CompileError {
    CompileError::RegexBuild {
        pattern: source.to_string(),
        source: error,
    }
}
