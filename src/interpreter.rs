/// The evaluator module computes the value of a postfix sequence.
///
/// The evaluator walks the postfix tokens left to right with a value stack,
/// applying operators and functions as they appear. It is the last stage of
/// the pipeline.
///
/// # Responsibilities
/// - Applies arithmetic operators and trigonometric functions.
/// - Reports runtime errors such as division by zero or missing operands.
/// - Checks that exactly one value remains at the end.
pub mod evaluator;
/// The lexer module tokenizes expression text for further processing.
///
/// The lexer reads the raw text and produces a sequence of tokens: numbers,
/// operators, parentheses and function names. This is the first stage of the
/// pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into classified tokens.
/// - Folds a prefix minus into the numeric literal that follows it.
/// - Reports lexical errors for unsupported characters.
pub mod lexer;
/// The converter module reorders infix tokens into postfix notation.
///
/// The converter runs the shunting-yard algorithm over the token sequence,
/// resolving operator precedence, associativity, parentheses and function
/// application. Its output needs no further grouping information.
///
/// # Responsibilities
/// - Emits operators in precedence-correct order.
/// - Binds each function to its parenthesized argument.
/// - Reports unbalanced parentheses and unknown identifiers.
pub mod converter;
