use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "parmatch",
    about = "Match text against {{name,regex}} parameter templates and extract the values",
    version
)]
pub struct Cli {
    /// Template, e.g. 'ban {{user,\w+}} for {{days,\d+}}d'
    pub template: String,

    /// Texts to match (lines are read from --input or stdin when omitted)
    pub texts: Vec<String>,

    /// Read input lines from a file
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Print only this parameter's value
    #[arg(short, long, conflicts_with = "check")]
    pub param: Option<String>,

    /// Only test whether the template occurs anywhere in each text
    #[arg(short, long)]
    pub check: bool,

    /// Show the compiled segments and expression, then exit
    #[arg(short, long)]
    pub explain: bool,

    /// Print one JSON object per input
    #[arg(long)]
    pub json: bool,

    /// Evaluate inputs on a single thread
    #[arg(short, long)]
    pub sequential: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// What to do with each input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Check,
    Param(String),
    Params,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.check {
            Mode::Check
        } else if let Some(name) = &self.param {
            Mode::Param(name.clone())
        } else {
            Mode::Params
        }
    }
}
