use std::{
    fs,
    io::{self, IsTerminal, Write},
};

use clap::Parser;
use rpncalc::session::{self, Mode};

/// rpncalc evaluates arithmetic expressions with `+ - * /`, parentheses and
/// the degree-based functions `sin`, `cos` and `tan`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rpncalc to read expressions, one per line, from a file instead.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Prints the postfix (Reverse Polish) form of each expression instead of
    /// its value.
    #[arg(short, long)]
    postfix: bool,

    /// An expression, or a file path with `--file`. Starts an interactive
    /// session when omitted.
    contents: Option<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let mode = if args.postfix { Mode::Postfix } else { Mode::Evaluate };
    let mut stdout = io::stdout().lock();

    let result = match args.contents {
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            session::run(script.as_bytes(), &mut stdout, mode, false)
        },
        Some(expression) => writeln!(stdout, "{}", session::render(&expression, mode)),
        None => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            session::run(stdin.lock(), &mut stdout, mode, prompt)
        },
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
