//! The `run` command: check and run a program.

use std::time::Duration;

use pseudoc::{evaluate, EvalOptions, Limits, QueuedInput, Status, StreamInput};

use super::{print_json, read_file, report};

/// Flags accepted after `pseudo run <file>`.
#[derive(Debug, Default, PartialEq)]
pub struct RunOptions {
    /// File whose lines feed `input`. Stdin when absent.
    pub input: Option<String>,
    pub limits: Limits,
    pub json: bool,
}

/// Parse run flags. Values follow their flag as the next argument.
pub fn parse_run_options(args: &[String]) -> Result<RunOptions, String> {
    let mut options = RunOptions::default();
    let mut args = args.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--input" => {
                let path = args.next().ok_or("`--input` needs a file path")?;
                options.input = Some(path.clone());
            }
            "--steps" => {
                let value = args.next().ok_or("`--steps` needs a number or `none`")?;
                let steps = if value == "none" {
                    None
                } else {
                    Some(
                        value
                            .parse::<u64>()
                            .map_err(|_| format!("invalid step budget `{value}`"))?,
                    )
                };
                options.limits = options.limits.with_max_steps(steps);
            }
            "--timeout-ms" => {
                let value = args.next().ok_or("`--timeout-ms` needs a number")?;
                let ms = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid timeout `{value}`"))?;
                options.limits = options
                    .limits
                    .with_time_limit(Some(Duration::from_millis(ms)));
            }
            other => return Err(format!("unknown option `{other}`")),
        }
    }
    Ok(options)
}

/// Run a file. Exits 1 on a runtime error and 2 on a syntax error.
pub fn run_file(path: &str, options: RunOptions) {
    let source = read_file(path);

    let eval_options = EvalOptions::new().with_limits(options.limits);
    let eval_options = match &options.input {
        Some(input_path) => eval_options.with_input(QueuedInput::from_text(&read_file(input_path))),
        None => eval_options.with_input(StreamInput::new(std::io::stdin().lock())),
    };

    let outcome = evaluate(&source, eval_options);

    if options.json {
        print_json(&outcome);
    } else {
        if !outcome.output.is_empty() {
            println!("{}", outcome.output);
        }
        report(&source, &outcome.diagnostics);
    }

    match outcome.status {
        Status::Success => {}
        Status::RuntimeError => std::process::exit(1),
        Status::SyntaxError => std::process::exit(2),
    }
}
