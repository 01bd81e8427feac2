pub mod cli;
pub mod eval;
pub mod input;
pub mod output;
