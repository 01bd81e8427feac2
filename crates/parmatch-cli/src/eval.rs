use crate::cli::Mode;
use parmatch::ParamMatcher;
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Whether the template occurs anywhere in the text.
    Found(bool),
    /// `None` when the text does not fully conform.
    Value(Option<Option<String>>),
    /// Values in template order; `None` when the text does not fully conform.
    Params(Option<Vec<(String, String)>>),
}

#[derive(Debug, Clone)]
pub struct Evaluation {
    pub text: String,
    pub outcome: Outcome,
}

impl Evaluation {
    pub fn matched(&self) -> bool {
        match &self.outcome {
            Outcome::Found(found) => *found,
            Outcome::Value(value) => value.is_some(),
            Outcome::Params(params) => params.is_some(),
        }
    }
}

pub fn evaluate(matcher: &ParamMatcher, mode: &Mode, text: String) -> Evaluation {
    let outcome = match mode {
        Mode::Check => Outcome::Found(matcher.matches(&text)),
        Mode::Param(name) => Outcome::Value(
            matcher
                .parameters(&text)
                .map(|params| params.get(name).map(str::to_string)),
        ),
        Mode::Params => Outcome::Params(matcher.parameters(&text).map(|params| {
            params
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect()
        })),
    };
    Evaluation { text, outcome }
}

/// Evaluate every text against one shared matcher, keeping input order.
pub fn evaluate_all(
    matcher: &ParamMatcher,
    mode: &Mode,
    texts: Vec<String>,
    sequential: bool,
) -> Vec<Evaluation> {
    if sequential || texts.len() == 1 {
        texts
            .into_iter()
            .map(|text| evaluate(matcher, mode, text))
            .collect()
    } else {
        texts
            .into_par_iter()
            .map(|text| evaluate(matcher, mode, text))
            .collect()
    }
}
