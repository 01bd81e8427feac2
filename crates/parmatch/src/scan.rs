//! Single pass over an encoded template, splitting it into literal text and
//! placeholder bodies.

use crate::escape;

/// A piece of the template as cut out by the scanner, already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawSegment {
    Literal(String),
    Placeholder(String),
}

#[derive(Debug, Default)]
struct Scanner {
    inside: bool,
    /// A single brace that only becomes structural if the next one matches.
    pending: bool,
    depth: usize,
    buffer: String,
    segments: Vec<RawSegment>,
}

impl Scanner {
    fn feed(&mut self, c: char) {
        if self.inside {
            self.feed_placeholder(c);
        } else {
            self.feed_literal(c);
        }
    }

    fn feed_literal(&mut self, c: char) {
        if c == '{' {
            if self.pending {
                self.pending = false;
                self.flush();
                self.inside = true;
            } else {
                self.pending = true;
            }
            return;
        }
        if self.pending {
            self.pending = false;
            self.buffer.push('{');
        }
        self.buffer.push(c);
    }

    fn feed_placeholder(&mut self, c: char) {
        if c == '}' {
            if self.depth > 0 {
                self.depth -= 1;
                self.buffer.push(c);
            } else if self.pending {
                self.pending = false;
                self.flush();
                self.inside = false;
            } else {
                self.pending = true;
            }
            return;
        }
        if self.pending {
            self.pending = false;
            self.buffer.push('}');
        }
        if c == '{' {
            self.depth += 1;
        }
        self.buffer.push(c);
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = escape::decode(&std::mem::take(&mut self.buffer));
        let segment = if self.inside {
            RawSegment::Placeholder(text)
        } else {
            RawSegment::Literal(text)
        };
        tracing::trace!(?segment, "scanned segment");
        self.segments.push(segment);
    }

    fn finish(mut self) -> Vec<RawSegment> {
        if self.pending {
            self.buffer.push(if self.inside { '}' } else { '{' });
        }
        // An unterminated placeholder is closed here rather than rejected.
        self.flush();
        self.segments
    }
}

/// Split a template into ordered raw segments.
///
/// `{{` opens a placeholder and `}}` closes it; a single brace is ordinary
/// text. Braces inside a placeholder nest, so `{{n,\d{2}}}` keeps the
/// quantifier in the body.
pub fn scan(template: &str) -> Vec<RawSegment> {
    let encoded = escape::encode(template);
    let mut scanner = Scanner::default();
    for c in encoded.chars() {
        scanner.feed(c);
    }
    scanner.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use RawSegment::{Literal, Placeholder};

    fn lit(s: &str) -> RawSegment {
        Literal(s.to_string())
    }

    fn ph(s: &str) -> RawSegment {
        Placeholder(s.to_string())
    }

    #[test]
    fn test_plain_literal() {
        assert_eq!(scan("hello"), vec![lit("hello")]);
    }

    #[test]
    fn test_empty_template() {
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_placeholder_between_literals() {
        assert_eq!(
            scan("hi {{name}}!"),
            vec![lit("hi "), ph("name"), lit("!")]
        );
    }

    #[test]
    fn test_adjacent_placeholders() {
        assert_eq!(
            scan(r"{{a,\d+}}-{{b,\d+}}"),
            vec![ph(r"a,\d+"), lit("-"), ph(r"b,\d+")]
        );
        assert_eq!(scan("{{a}}{{b}}"), vec![ph("a"), ph("b")]);
    }

    #[test]
    fn test_single_brace_is_literal() {
        assert_eq!(scan("a{b}c"), vec![lit("a{b}c")]);
    }

    #[test]
    fn test_trailing_single_brace_kept() {
        assert_eq!(scan("a{"), vec![lit("a{")]);
    }

    #[test]
    fn test_escaped_brace_does_not_open() {
        assert_eq!(scan(r"\{\{x}}"), vec![lit(r"\{\{x}}")]);
        assert_eq!(scan(r"\{{{n}}"), vec![lit(r"\{"), ph("n")]);
    }

    #[test]
    fn test_marker_restored() {
        assert_eq!(
            scan("a&b{{x,&}}"),
            vec![lit("a&b"), ph("x,&")]
        );
    }

    #[test]
    fn test_nested_quantifier_in_body() {
        assert_eq!(scan(r"{{n,\d{2}}}x"), vec![ph(r"n,\d{2}"), lit("x")]);
        assert_eq!(
            scan(r"{{n,\d{1,3}}}-{{m,[a-z]{2}}}"),
            vec![ph(r"n,\d{1,3}"), lit("-"), ph("m,[a-z]{2}")]
        );
    }

    #[test]
    fn test_single_close_brace_in_body() {
        assert_eq!(scan("{{a,x}y}}"), vec![ph("a,x}y")]);
    }

    #[test]
    fn test_unterminated_placeholder_is_closed() {
        assert_eq!(scan("id: {{id,\\d+"), vec![lit("id: "), ph(r"id,\d+")]);
        assert_eq!(scan("{{a}"), vec![ph("a}")]);
    }

    #[test]
    fn test_empty_placeholder_dropped() {
        assert_eq!(scan("a{{}}b"), vec![lit("a"), lit("b")]);
    }

    #[test]
    fn test_triple_open_brace_nests() {
        assert_eq!(scan("{{{x}}}"), vec![ph("{x}")]);
    }
}
