use crate::eval::{Evaluation, Outcome};
use parmatch::ParamMatcher;
use serde_json::{json, Map, Value};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub struct Output {
    stdout: StandardStream,
}

impl Output {
    pub fn new(color: bool) -> Self {
        let color_choice = if color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(color_choice),
        }
    }

    fn set_color(&mut self, color: Color) {
        let _ = self.stdout.set_color(ColorSpec::new().set_fg(Some(color)));
    }

    fn set_bold(&mut self) {
        let _ = self.stdout.set_color(ColorSpec::new().set_bold(true));
    }

    fn set_dim(&mut self) {
        let _ = self.stdout.set_color(ColorSpec::new().set_dimmed(true));
    }

    fn reset(&mut self) {
        let _ = self.stdout.reset();
    }

    pub fn print_explain(&mut self, matcher: &ParamMatcher) -> io::Result<()> {
        self.set_bold();
        write!(self.stdout, "template")?;
        self.reset();
        writeln!(self.stdout, "  {}", matcher.template())?;
        self.set_bold();
        write!(self.stdout, "regex")?;
        self.reset();
        writeln!(self.stdout, "     {}", matcher.as_str())?;
        self.set_bold();
        write!(self.stdout, "params")?;
        self.reset();
        writeln!(self.stdout, "    {}", matcher.param_count())?;

        for segment in matcher.segments() {
            match (segment.name(), segment.index()) {
                (Some(name), Some(index)) => {
                    self.set_color(Color::Cyan);
                    write!(self.stdout, "  #{:<3}", index)?;
                    self.reset();
                    write!(self.stdout, "{} = ", name)?;
                    self.set_color(Color::Yellow);
                    write!(self.stdout, "{}", segment.body())?;
                    self.reset();
                    if let Some(groups) = segment.group_count().filter(|&g| g > 0) {
                        self.set_dim();
                        write!(self.stdout, "  (+{} nested)", groups)?;
                        self.reset();
                    }
                    writeln!(self.stdout)?;
                }
                _ => {
                    self.set_dim();
                    write!(self.stdout, "  text")?;
                    self.reset();
                    writeln!(self.stdout, "  {:?}", segment.body())?;
                }
            }
        }
        self.stdout.flush()
    }

    pub fn print_evaluation(&mut self, eval: &Evaluation) -> io::Result<()> {
        match &eval.outcome {
            Outcome::Value(Some(value)) => {
                writeln!(self.stdout, "{}", value.as_deref().unwrap_or_default())?;
            }
            Outcome::Params(Some(params)) => {
                self.print_mark(true)?;
                writeln!(self.stdout, " {}", eval.text)?;
                for (name, value) in params {
                    self.set_dim();
                    write!(self.stdout, "    {} = ", name)?;
                    self.reset();
                    writeln!(self.stdout, "{}", value)?;
                }
            }
            _ => {
                self.print_mark(eval.matched())?;
                writeln!(self.stdout, " {}", eval.text)?;
            }
        }
        Ok(())
    }

    fn print_mark(&mut self, matched: bool) -> io::Result<()> {
        if matched {
            self.set_color(Color::Green);
            write!(self.stdout, "✓")?;
        } else {
            self.set_color(Color::Red);
            write!(self.stdout, "✗")?;
        }
        self.reset();
        Ok(())
    }

    pub fn print_json(&mut self, eval: &Evaluation) -> io::Result<()> {
        writeln!(self.stdout, "{}", to_json(eval))
    }

    pub fn print_summary(&mut self, matched: usize, total: usize) -> io::Result<()> {
        writeln!(self.stdout)?;
        if matched == total {
            self.set_color(Color::Green);
        } else {
            self.set_color(Color::Red);
        }
        write!(self.stdout, "{}/{} matched", matched, total)?;
        self.reset();
        writeln!(self.stdout)?;
        self.stdout.flush()
    }
}

pub fn to_json(eval: &Evaluation) -> Value {
    let mut object = json!({
        "text": eval.text,
        "matched": eval.matched(),
    });
    match &eval.outcome {
        Outcome::Found(_) => {}
        Outcome::Value(value) => {
            object["value"] = json!(value.clone().flatten());
        }
        Outcome::Params(params) => {
            let map: Map<String, Value> = params
                .iter()
                .flatten()
                .map(|(name, value)| (name.clone(), Value::String(value.clone())))
                .collect();
            object["params"] = Value::Object(map);
        }
    }
    object
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(text: &str, outcome: Outcome) -> Evaluation {
        Evaluation {
            text: text.to_string(),
            outcome,
        }
    }

    #[test]
    fn test_json_check() {
        let value = to_json(&eval("a b", Outcome::Found(true)));
        assert_eq!(value, json!({"text": "a b", "matched": true}));
    }

    #[test]
    fn test_json_value() {
        let value = to_json(&eval("x", Outcome::Value(None)));
        assert_eq!(value, json!({"text": "x", "matched": false, "value": null}));

        let value = to_json(&eval("7", Outcome::Value(Some(Some("7".to_string())))));
        assert_eq!(value, json!({"text": "7", "matched": true, "value": "7"}));
    }

    #[test]
    fn test_json_params_last_duplicate_wins() {
        let params = vec![
            ("n".to_string(), "1".to_string()),
            ("n".to_string(), "2".to_string()),
        ];
        let value = to_json(&eval("12", Outcome::Params(Some(params))));
        assert_eq!(
            value,
            json!({"text": "12", "matched": true, "params": {"n": "2"}})
        );
    }

    #[test]
    fn test_json_params_no_match() {
        let value = to_json(&eval("zz", Outcome::Params(None)));
        assert_eq!(
            value,
            json!({"text": "zz", "matched": false, "params": {}})
        );
    }
}
