use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use env_logger::Env;
use infixcalc::{
    evaluate,
    operator::{Symbol, UNARY_PRECEDENCE},
};
use log::debug;

/// Sample expressions shown on the help screen, evaluated live.
const EXAMPLES: [&str; 7] =
    ["1+2*3", "2+2*2*3", "1==2", "1+3 > 2", "(4>=4) && 0", "(1+2)*3", "+++2-5*(3^2)"];

/// infixcalc evaluates integer infix expressions with arithmetic, comparison
/// and logical operators.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates every non-blank line of a file instead of a single
    /// expression.
    #[arg(short, long, value_name = "PATH", conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Prints the supported operators with their precedence, then exits.
    #[arg(long)]
    operators: bool,

    /// Logs each validation and evaluation step. `RUST_LOG` takes priority.
    #[arg(short, long)]
    verbose: bool,

    /// The expression to evaluate. An interactive session starts when it is
    /// omitted.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    if args.operators {
        print_operators();
        return ExitCode::SUCCESS;
    }

    if let Some(path) = &args.file {
        return run_file(path);
    }

    match &args.expression {
        Some(expression) => match evaluate(expression) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        },
        None => interactive(),
    }
}

/// Evaluates each non-blank line of `path`, printing one result per line.
fn run_file(path: &Path) -> ExitCode {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to read the input file '{}': {e}", path.display());
            return ExitCode::FAILURE;
        },
    };

    let mut failed = false;
    for (number, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match evaluate(line) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                failed = true;
                eprintln!("Line {}: {e}", number + 1);
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Reads one expression per line from standard input until end of input or
/// `quit`.
fn interactive() -> ExitCode {
    print_banner();
    println!("Type an expression, `help` for the operator table, or `quit` to leave.");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Failed to write to standard output: {e}");
            return ExitCode::FAILURE;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => {
                println!();
                break;
            },
            Ok(_) => {},
            Err(e) => {
                eprintln!("Failed to read from standard input: {e}");
                return ExitCode::FAILURE;
            },
        }

        let expression = line.trim_end_matches(['\n', '\r']);
        match expression.trim() {
            "" => {},
            "quit" | "exit" => break,
            "help" => print_operators(),
            _ => match evaluate(expression) {
                Ok(value) => println!("{value}"),
                Err(e) => {
                    debug!("{expression:?} rejected: {e:?}");
                    println!("{e}");
                },
            },
        }
    }

    ExitCode::SUCCESS
}

fn print_banner() {
    println!("===============================================");
    println!("    Infix Expression Evaluator");
    println!("===============================================");
    println!();
}

/// Prints the precedence table followed by worked examples.
fn print_operators() {
    print_banner();
    println!("Supported operators (in precedence order):");
    for symbol in Symbol::ALL {
        println!("  {:<4} {:<26} precedence {}",
                 symbol.spelling(),
                 symbol.description(),
                 symbol.binary_precedence());
    }
    println!("  +, - used as a sign bind at precedence {UNARY_PRECEDENCE}");
    println!("  ( )  grouping");
    println!();

    println!("Example expressions:");
    for example in EXAMPLES {
        match evaluate(example) {
            Ok(value) => println!("  {example:<14} -> {value}"),
            Err(e) => println!("  {example:<14} -> {e}"),
        }
    }
    println!();
}
