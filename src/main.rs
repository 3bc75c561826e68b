use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use log::LevelFilter;
use treelab::{evaluate, parse, parse_strict};

/// treelab evaluates infix arithmetic expressions such as `(2 + 3) * 4`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the input as a path and evaluate every non-empty line of the file.
    #[arg(short, long, requires = "input")]
    file: bool,

    /// Reject anything that follows a complete expression.
    #[arg(short, long)]
    strict: bool,

    /// Print the parsed tree, fully parenthesized, before the result.
    #[arg(short, long)]
    tree: bool,

    /// Increase log output. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. Read from standard input when omitted.
    input: Option<String>,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();

    let lines = match read_input(&args) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        },
    };

    let (mut stdout, mut stderr) = (io::stdout().lock(), io::stderr().lock());
    for line in &lines {
        if let Err(e) = report(line, &args, &mut stdout, &mut stderr) {
            log::error!("failed to write output: {e}");
            std::process::exit(1);
        }
    }
}

/// Collects the expressions to evaluate, one per entry.
///
/// Blank lines are only skipped when reading a file; a blank expression given
/// on the command line or on standard input is passed on and reported as an
/// error.
fn read_input(args: &Args) -> io::Result<Vec<String>> {
    match &args.input {
        Some(path) if args.file => {
            log::info!("reading expressions from {path}");
            let contents = fs::read_to_string(path).map_err(|e| {
                              io::Error::new(e.kind(),
                                             format!("failed to read the input file '{path}': {e}"))
                          })?;
            Ok(file_lines(&contents))
        },
        Some(expression) => Ok(vec![expression.clone()]),
        None => {
            print!("Enter an expression: ");
            io::stdout().flush()?;

            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            Ok(vec![line])
        },
    }
}

/// Splits file contents into expressions, dropping blank lines.
fn file_lines(contents: &str) -> Vec<String> {
    contents.lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
}

/// Parses and evaluates one expression and writes the outcome.
///
/// Errors from either stage are written to `err` and do not stop the process.
fn report(source: &str,
          args: &Args,
          out: &mut impl Write,
          err: &mut impl Write)
          -> io::Result<()> {
    let parsed = if args.strict { parse_strict(source) } else { parse(source) };

    let tree = match parsed {
        Ok(tree) => tree,
        Err(e) => return writeln!(err, "Error: {e}"),
    };

    if args.tree {
        writeln!(out, "Tree: {tree}")?;
    }

    match evaluate(&tree) {
        Ok(value) => writeln!(out, "Result: {value}"),
        Err(e) => writeln!(err, "Error: {e}"),
    }
}
