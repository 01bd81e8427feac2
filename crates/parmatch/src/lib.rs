//! Named, regex-constrained parameters in plain-text templates.
//!
//! A template is literal text with placeholders written as `{{name}}` or
//! `{{name,pattern}}`. Compiling it yields a [`ParamMatcher`] that tests
//! whether a text conforms and pulls the placeholder values out of it.
//! Literal text is itself regular-expression source; write `\{` for a
//! literal opening brace.
//!
//! # Example
//!
//! ```
//! use parmatch::compile;
//!
//! let matcher = compile(r"{{a,\d+}}-{{b,\d+}}").unwrap();
//!
//! assert!(matcher.matches("range 12-34"));
//!
//! let params = matcher.params("12-34");
//! assert_eq!(params["a"], "12");
//! assert_eq!(params["b"], "34");
//!
//! // Extraction needs the whole text to conform.
//! assert!(matcher.params("range 12-34").is_empty());
//! ```

mod assemble;
mod error;
pub mod escape;
mod matcher;
pub mod scan;
pub mod segment;

pub use error::{CompileError, Result};
pub use matcher::{ParamMatcher, Parameters};
pub use segment::Segment;

/// Compile a template. Shorthand for [`ParamMatcher::new`].
pub fn compile(template: &str) -> Result<ParamMatcher> {
    ParamMatcher::new(template)
}
