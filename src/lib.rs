//! # rpncalc
//!
//! rpncalc is an arithmetic expression evaluator written in Rust.
//! It tokenizes an infix expression, reorders it into postfix notation with the
//! shunting-yard algorithm, and evaluates the result with a value stack. The
//! four binary operators, parentheses, negative literals and the degree-based
//! functions `sin`, `cos` and `tan` are supported.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{Error, ParseError},
    interpreter::{converter::to_postfix, evaluator::core::evaluate_postfix, lexer::tokenize},
    token::Token,
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// converting or evaluating an expression. Every error carries a readable
/// message suitable for showing to the user unchanged.
///
/// # Responsibilities
/// - Defines error enums for each failure mode (tokenizer, converter,
///   evaluator).
/// - Wraps both phases in a single `Error` for the top-level entry point.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// This module holds the three stages an expression passes through: the
/// lexer, the postfix converter and the evaluator. Each stage only
/// communicates with the next through a token or value sequence.
///
/// # Responsibilities
/// - Coordinates tokenizing, shunting-yard conversion and evaluation.
/// - Exposes each stage on its own for callers that need postfix output.
pub mod interpreter;
/// Line-oriented interactive session.
///
/// Reads expressions one line at a time, evaluates them and writes the
/// results, stopping at `exit` or end of input.
pub mod session;
/// Defines the token types shared by every stage.
///
/// This module declares `Token` together with the `Operator` and `Function`
/// enums and their fixed properties: precedence, associativity and names.
pub mod token;

/// Evaluates an infix arithmetic expression.
///
/// The expression is tokenized, converted to postfix notation and evaluated.
/// Each stage stops at its first error, and nothing is kept between calls.
///
/// # Errors
/// Returns `Error::Parse` if the expression cannot be tokenized or converted,
/// and `Error::Runtime` if evaluation fails.
///
/// # Examples
/// ```
/// use rpncalc::{
///     error::{Error, RuntimeError},
///     evaluate,
/// };
///
/// assert_eq!(evaluate("1 + 1 * 5").unwrap(), 6.0);
/// assert_eq!(evaluate("(1 + 1) * 5").unwrap(), 10.0);
///
/// let err = evaluate("5 / 0").unwrap_err();
/// assert_eq!(err, Error::Runtime(RuntimeError::DivisionByZero));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, Error> {
    let tokens = postfix(expression)?;
    Ok(evaluate_postfix(&tokens)?)
}

/// Converts an infix expression to its postfix token sequence without
/// evaluating it.
///
/// # Errors
/// Returns a `ParseError` if the expression cannot be tokenized or converted.
///
/// # Examples
/// ```
/// use rpncalc::{format_postfix, postfix};
///
/// let tokens = postfix("(1 * 2) - (3 * 4)").unwrap();
/// assert_eq!(format_postfix(&tokens), "1.0 2.0 * 3.0 4.0 * -");
/// ```
pub fn postfix(expression: &str) -> Result<Vec<Token>, ParseError> {
    to_postfix(tokenize(expression)?)
}

/// Renders a token sequence as space-separated text.
///
/// # Examples
/// ```
/// use rpncalc::{format_postfix, postfix};
///
/// let tokens = postfix("sin(30) + -2").unwrap();
/// assert_eq!(format_postfix(&tokens), "30.0 sin -2.0 +");
/// ```
#[must_use]
pub fn format_postfix(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}
