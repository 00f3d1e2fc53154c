use anyhow::{bail, Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{debug, info};
use std::io;
use std::io::{BufRead, IsTerminal, Write};
use time_calculator::calculator::{error_message, TimeCalculator};
use time_calculator::interpreter::Strictness;

/// Adds, subtracts, multiplies and divides hours and minutes
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
// Lets "-5+2" through as an expression while "-v" and "-q" stay flags.
#[clap(allow_hyphen_values = true)]
struct Arguments {
    /// Expressions to evaluate, e.g. "8:30 + 1:45". Read line by line from
    /// standard input when none are given
    expressions: Vec<String>,

    /// Reject unsupported characters, invalid numbers and missing parentheses
    #[clap(long)]
    strict: bool,

    /// Print the most recent results before exiting
    #[clap(long)]
    history: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    debug!("{:?}", args);

    let strictness = if args.strict {
        Strictness::Strict
    } else {
        Strictness::Lenient
    };
    let mut calculator = TimeCalculator::new(strictness);
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let failures = if args.expressions.is_empty() {
        let stdin = io::stdin();
        let prompt = stdin.is_terminal();
        run_session(&mut calculator, stdin.lock(), &mut output, prompt)?
    } else {
        let mut failures = 0;
        for expression in &args.expressions {
            if !calculate_and_print(&mut calculator, expression, &mut output)? {
                failures += 1;
            }
        }
        failures
    };

    if args.history {
        print_history(&calculator, &mut output)?;
    }
    if failures > 0 && !args.expressions.is_empty() {
        bail!("{} of {} expressions failed", failures, args.expressions.len());
    }
    Ok(())
}

/// Reads expressions and commands line by line until `quit`, `exit` or end of input.
///
/// returns: How many expressions failed to evaluate.
fn run_session(
    calculator: &mut TimeCalculator,
    input: impl BufRead,
    output: &mut impl Write,
    prompt: bool,
) -> Result<usize> {
    let mut failures = 0;
    let mut lines = input.lines();
    loop {
        if prompt {
            write!(output, "> ")?;
            output.flush().context("Failed to flush prompt")?;
        }
        let line = match lines.next() {
            Some(line) => line.context("Failed to read from standard input")?,
            None => break,
        };
        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "history" => print_history(calculator, output)?,
            "clear" => {
                calculator.clear_history();
                info!("Cleared history");
            }
            expression => {
                if !calculate_and_print(calculator, expression, output)? {
                    failures += 1;
                }
            }
        }
    }
    Ok(failures)
}

/// returns: Whether the expression could be evaluated.
fn calculate_and_print(
    calculator: &mut TimeCalculator,
    expression: &str,
    output: &mut impl Write,
) -> Result<bool> {
    match calculator.calculate(expression) {
        Ok(calculation) => {
            writeln!(output, "{} = {}", calculation.input, calculation.formatted)?;
            if calculation.formatted.is_rounded {
                writeln!(
                    output,
                    "  rounded, delta {}",
                    calculation.formatted.delta_label()
                )?;
            }
            Ok(true)
        }
        Err(error) => {
            writeln!(output, "{}", error_message(&error))?;
            Ok(false)
        }
    }
}

fn print_history(calculator: &TimeCalculator, output: &mut impl Write) -> Result<()> {
    let history = calculator.history();
    if history.is_empty() {
        writeln!(output, "No history")?;
    }
    for entry in history.entries() {
        writeln!(output, "{}", entry)?;
    }
    Ok(())
}
