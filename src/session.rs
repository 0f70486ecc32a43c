use std::io::{self, BufRead, Write};

use log::debug;

use crate::{evaluate, format_postfix, postfix};

/// What a session prints for each expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Print the value of the expression.
    #[default]
    Evaluate,
    /// Print the postfix form of the expression.
    Postfix,
}

/// How the session reacts to one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank line; nothing is printed.
    Skip,
    /// The user asked to leave.
    Exit,
    /// A line of text to print.
    Output(String),
}

/// Decides what to do with one line of input.
///
/// Blank lines are skipped and `exit`, in any letter case, ends the session.
/// Anything else is treated as an expression and rendered with [`render`].
///
/// # Example
/// ```
/// use rpncalc::session::{Mode, Outcome, handle_line};
///
/// assert_eq!(handle_line("   ", Mode::Evaluate), Outcome::Skip);
/// assert_eq!(handle_line("EXIT", Mode::Evaluate), Outcome::Exit);
/// assert_eq!(handle_line("2 * 3", Mode::Evaluate),
///            Outcome::Output("Result: 6.0".to_string()));
/// ```
#[must_use]
pub fn handle_line(line: &str, mode: Mode) -> Outcome {
    let input = line.trim();

    if input.is_empty() {
        return Outcome::Skip;
    }
    if input.eq_ignore_ascii_case("exit") {
        return Outcome::Exit;
    }

    Outcome::Output(render(input, mode))
}

/// Formats the outcome of one expression as a printable line.
///
/// Errors are printed in place of the value, so a failed expression never
/// ends the session.
#[must_use]
pub fn render(expression: &str, mode: Mode) -> String {
    match mode {
        Mode::Evaluate => match evaluate(expression) {
            Ok(value) => format!("Result: {value:?}"),
            Err(e) => format!("Result: {e}"),
        },
        Mode::Postfix => match postfix(expression) {
            Ok(tokens) => format!("Postfix: {}", format_postfix(&tokens)),
            Err(e) => format!("Postfix: {e}"),
        },
    }
}

/// Runs a read-evaluate-print loop until `exit` or end of input.
///
/// # Parameters
/// - `input`: Source of expression lines.
/// - `output`: Destination for results and prompts.
/// - `mode`: Whether to evaluate or only convert each expression.
/// - `prompt`: Whether to write `> ` before reading each line.
///
/// # Errors
/// Returns any I/O error from reading `input` or writing `output`.
pub fn run<R, W>(input: R, output: &mut W, mode: Mode, prompt: bool) -> io::Result<()>
    where R: BufRead,
          W: Write
{
    let mut lines = input.lines();

    loop {
        if prompt {
            write!(output, "> ")?;
            output.flush()?;
        }

        let Some(line) = lines.next() else {
            debug!("end of input");
            break;
        };

        match handle_line(&line?, mode) {
            Outcome::Skip => {},
            Outcome::Exit => {
                debug!("exit requested");
                break;
            },
            Outcome::Output(text) => writeln!(output, "{text}")?,
        }
    }

    Ok(())
}
