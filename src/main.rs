use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use rpncalc::{
    Calculator,
    interpreter::{
        advisory::{Advisory, AdvisorySink},
        evaluator::core::DEFAULT_PRECISION,
    },
};

/// rpncalc evaluates arithmetic expressions through reverse Polish notation.
///
/// Supports `+ - * / % ** //`, unary `+` and `-`, and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Decimal places kept in fractional results. Asked for interactively
    /// when omitted and no expression is given.
    #[arg(short, long)]
    precision: Option<u32>,

    /// Evaluates this expression and exits instead of starting the
    /// interactive shell.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

/// Prints advisories in yellow on standard output.
struct ConsoleSink;

impl AdvisorySink for ConsoleSink {
    fn advise(&mut self, advisory: Advisory) {
        println!("\x1b[33m{advisory}\x1b[0m");
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    if let Some(expression) = args.expression {
        let calculator = Calculator::new(args.precision.unwrap_or(DEFAULT_PRECISION));
        return match calculator.solve_with(&expression, &mut ConsoleSink) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            },
        };
    }

    let stdin = io::stdin();
    if let Err(e) = run_shell(args.precision, &mut stdin.lock()) {
        eprintln!("Failed to read from the terminal: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::new("warn"),
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter)
                                     .with_writer(io::stderr)
                                     .try_init();
}

/// Reads expressions until `q` or end of input, printing each result.
fn run_shell(precision: Option<u32>, input: &mut impl BufRead) -> io::Result<()> {
    println!("Calculator based on reverse Polish notation (RPN).");

    let precision = match precision {
        Some(p) => p,
        None => match ask_precision(input)? {
            Some(p) => p,
            None => return farewell(),
        },
    };
    let calculator = Calculator::new(precision);
    tracing::debug!(precision, "shell started");

    while let Some(line) = prompt(input, "Enter an expression (q to quit): ")? {
        let expression = line.trim();
        if expression.eq_ignore_ascii_case("q") {
            break;
        }

        match calculator.solve_with(expression, &mut ConsoleSink) {
            Ok(value) => println!("Result: {value}"),
            Err(e) => println!("Error: {e}"),
        }
        println!("-------------------");
    }

    farewell()
}

/// Asks for the rounding precision; Enter keeps the default. Returns `None` at
/// end of input.
fn ask_precision(input: &mut impl BufRead) -> io::Result<Option<u32>> {
    let mut message = format!("Round fractional results to how many decimal places \
                               (default {DEFAULT_PRECISION}, press Enter to keep it): ");
    loop {
        let Some(line) = prompt(input, &message)? else {
            return Ok(None);
        };
        let answer = line.trim();
        if answer.is_empty() {
            return Ok(Some(DEFAULT_PRECISION));
        }
        if let Ok(p) = answer.parse() {
            return Ok(Some(p));
        }
        message = "Enter a valid number or press Enter: ".to_string();
    }
}

/// Prints `message` and reads one line. Returns `None` at end of input.
fn prompt(input: &mut impl BufRead, message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn farewell() -> io::Result<()> {
    println!("Thank you for using the calculator!");
    Ok(())
}
