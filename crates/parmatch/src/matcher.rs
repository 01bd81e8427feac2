//! Compiled templates: membership tests and parameter extraction.

use crate::assemble::{assemble, Assembled};
use crate::error::{CompileError, Result};
use crate::scan::scan;
use crate::segment::{compile_segments, Segment};
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A template compiled into a single regular expression.
///
/// Immutable once built; share it freely between threads.
///
/// [`matches`](Self::matches) searches anywhere in the text, while the
/// extraction methods only succeed when the whole text conforms.
///
/// ```
/// use parmatch::ParamMatcher;
///
/// let matcher = ParamMatcher::new(r"ban {{user,\w+}} for {{days,\d+}}d").unwrap();
///
/// assert!(matcher.matches("!ban alice for 3d please"));
/// assert_eq!(matcher.param("days", "ban alice for 3d"), Some("3"));
/// assert_eq!(matcher.param("days", "!ban alice for 3d please"), None);
/// ```
#[derive(Debug, Clone)]
pub struct ParamMatcher {
    template: String,
    regex: Assembled,
    segments: Vec<Segment>,
    param_count: usize,
}

impl ParamMatcher {
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        let segments = compile_segments(scan(&template));
        let regex = assemble(&segments)?;
        let param_count = segments.iter().filter(|s| s.is_placeholder()).count();

        Ok(Self {
            template,
            regex,
            segments,
            param_count,
        })
    }

    /// The template exactly as supplied.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Number of placeholder segments.
    pub fn param_count(&self) -> usize {
        self.param_count
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The compiled expression used by [`matches`](Self::matches).
    pub fn regex(&self) -> &Regex {
        &self.regex.search
    }

    /// Source text of the assembled expression.
    pub fn as_str(&self) -> &str {
        &self.regex.source
    }

    /// Whether any part of `text` conforms to the template.
    pub fn matches(&self, text: &str) -> bool {
        self.regex.search.is_match(text)
    }

    /// Value of the first placeholder called `name`, if all of `text`
    /// conforms to the template.
    pub fn param<'t>(&self, name: &str, text: &'t str) -> Option<&'t str> {
        self.parameters(text)?.get(name)
    }

    /// All placeholder values of a full match, keyed by name. Later
    /// placeholders overwrite earlier ones with the same name. A placeholder
    /// whose group took no part in the match (the losing side of an
    /// alternation) has no entry and overwrites nothing. Empty when `text`
    /// does not conform.
    pub fn params(&self, text: &str) -> HashMap<String, String> {
        self.parameters(text)
            .map(Parameters::into_map)
            .unwrap_or_default()
    }

    /// Borrowed view over a full match, or `None` if `text` does not conform.
    pub fn parameters<'m, 't>(&'m self, text: &'t str) -> Option<Parameters<'m, 't>> {
        let captures = self.regex.full.captures(text)?;
        Some(Parameters {
            segments: &self.segments,
            captures,
        })
    }
}

/// Placeholder values captured from a conforming text.
#[derive(Debug)]
pub struct Parameters<'m, 't> {
    segments: &'m [Segment],
    captures: Captures<'t>,
}

impl<'m, 't> Parameters<'m, 't> {
    /// Value of the first placeholder called `name`. `None` if there is no
    /// such placeholder or its group took no part in the match.
    pub fn get(&self, name: &str) -> Option<&'t str> {
        let segment = self
            .segments
            .iter()
            .find(|s| s.name() == Some(name))?;
        self.value(segment)
    }

    /// Name and value of every participating placeholder, in template order.
    pub fn iter(&self) -> impl Iterator<Item = (&'m str, &'t str)> + '_ {
        self.segments.iter().filter_map(move |segment| {
            let name = segment.name()?;
            Some((name, self.value(segment)?))
        })
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn into_map(self) -> HashMap<String, String> {
        self.iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    fn value(&self, segment: &Segment) -> Option<&'t str> {
        let index = segment.index()?;
        self.captures.get(index).map(|m| m.as_str())
    }
}

impl FromStr for ParamMatcher {
    type Err = CompileError;

    fn from_str(template: &str) -> Result<Self> {
        Self::new(template)
    }
}

impl TryFrom<&str> for ParamMatcher {
    type Error = CompileError;

    fn try_from(template: &str) -> Result<Self> {
        Self::new(template)
    }
}

impl fmt::Display for ParamMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}
