//! Turning raw segments into named, indexed segments.

use crate::scan::RawSegment;
use regex::Regex;

/// Sub-pattern used for a placeholder written without one, as in `{{name}}`.
pub const DEFAULT_PATTERN: &str = ".*";

/// One ordered unit of a compiled template.
///
/// A literal segment has no name and no capture-group index; its body is
/// copied verbatim into the assembled expression. A placeholder segment has a
/// name, its sub-pattern as body, and the 1-based index of the group wrapping
/// it in the assembled expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    name: Option<String>,
    body: String,
    index: Option<usize>,
    position: usize,
    group_count: Option<usize>,
}

impl Segment {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Literal text, or the placeholder's sub-pattern source.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Capture-group index, only set for placeholders.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Position among sibling segments, starting at 0.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Capturing groups the body introduces on its own, or `None` when the
    /// body is not a valid expression by itself.
    pub fn group_count(&self) -> Option<usize> {
        self.group_count
    }

    pub fn is_placeholder(&self) -> bool {
        self.name.is_some()
    }

    /// Text this segment contributes to the assembled expression.
    pub(crate) fn push_source(&self, out: &mut String) {
        if self.is_placeholder() {
            out.push('(');
            out.push_str(&self.body);
            out.push(')');
        } else {
            out.push_str(&self.body);
        }
    }
}

/// Number of capturing groups `pattern` introduces, not counting the
/// implicit whole-match group. `None` if `pattern` does not compile.
pub fn group_count(pattern: &str) -> Option<usize> {
    Regex::new(pattern)
        .ok()
        .map(|regex| regex.captures_len() - 1)
}

/// Split a placeholder body on its first comma into name and sub-pattern.
fn split_placeholder(body: &str) -> (&str, &str) {
    body.split_once(',').unwrap_or((body, DEFAULT_PATTERN))
}

/// Name the placeholders and assign each the index of its capture group.
///
/// Indices start at 1. After a placeholder, the next index skips over the
/// group wrapping it and every group inside its sub-pattern. Groups written
/// in literal text shift later indices the same way, since the literal text
/// is part of the expression.
pub fn compile_segments(raw: Vec<RawSegment>) -> Vec<Segment> {
    let mut next_index = 1;
    let mut segments = Vec::with_capacity(raw.len());

    for (position, raw) in raw.into_iter().enumerate() {
        let segment = match raw {
            RawSegment::Literal(text) => {
                let groups = group_count(&text);
                next_index += groups.unwrap_or(0);
                Segment {
                    name: None,
                    body: text,
                    index: None,
                    position,
                    group_count: groups,
                }
            }
            RawSegment::Placeholder(body) => {
                let (name, pattern) = split_placeholder(&body);
                let groups = group_count(pattern);
                let index = next_index;
                next_index += 1 + groups.unwrap_or(0);
                tracing::trace!(name, pattern, index, ?groups, "placeholder");
                Segment {
                    name: Some(name.to_string()),
                    body: pattern.to_string(),
                    index: Some(index),
                    position,
                    group_count: groups,
                }
            }
        };
        segments.push(segment);
    }

    segments
}
