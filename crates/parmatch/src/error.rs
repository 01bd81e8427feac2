use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CompileError {
    #[error("placeholder '{name}' has an invalid pattern '{pattern}': {source}")]
    Placeholder {
        name: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to build template regex '{pattern}': {source}")]
    RegexBuild {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, CompileError>;
