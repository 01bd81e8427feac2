use anyhow::Context;
use clap::Parser;
use parmatch::ParamMatcher;
use parmatch_cli::cli::Cli;
use parmatch_cli::eval::evaluate_all;
use parmatch_cli::input::read_texts;
use parmatch_cli::output::Output;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("PARMATCH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("parmatch: {:#}", e);
            2
        }
    };

    std::process::exit(code);
}

fn run() -> anyhow::Result<i32> {
    let cli = Cli::parse();

    let use_color = !cli.no_color && atty::is(atty::Stream::Stdout);
    let mut output = Output::new(use_color);

    let matcher = ParamMatcher::new(cli.template.as_str())
        .with_context(|| format!("invalid template '{}'", cli.template))?;

    if cli.explain {
        output.print_explain(&matcher)?;
        return Ok(0);
    }

    let texts = read_texts(&cli.texts, cli.input.as_deref())?;
    let mode = cli.mode();
    tracing::debug!(inputs = texts.len(), ?mode, "evaluating");

    let evaluations = evaluate_all(&matcher, &mode, texts, cli.sequential);

    for eval in &evaluations {
        if cli.json {
            output.print_json(eval)?;
        } else {
            output.print_evaluation(eval)?;
        }
    }

    let matched = evaluations.iter().filter(|e| e.matched()).count();
    if !cli.json && cli.param.is_none() && evaluations.len() > 1 {
        output.print_summary(matched, evaluations.len())?;
    }

    Ok(if matched == evaluations.len() { 0 } else { 1 })
}
