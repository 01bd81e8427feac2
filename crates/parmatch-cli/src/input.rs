use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

/// Input texts: the command-line arguments if any, otherwise the lines of
/// `file`, otherwise the lines of stdin.
pub fn read_texts(args: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }
    match file {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read input file '{}'", path.display()))?;
            Ok(content.lines().map(str::to_string).collect())
        }
        None => io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("failed to read stdin"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_take_precedence() {
        let args = vec!["a".to_string()];
        let texts = read_texts(&args, Some(Path::new("/nonexistent"))).unwrap();
        assert_eq!(texts, args);
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = read_texts(&[], Some(Path::new("/nonexistent/inputs.txt"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/inputs.txt"));
    }
}
