use log::{debug, trace};

use crate::{error::RuntimeError, token::Token};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Holds the value stack while a postfix sequence is evaluated.
///
/// ## Usage
///
/// An `Evaluator` lives for exactly one evaluation. Tokens are fed to
/// [`Evaluator::step`] in postfix order, then [`Evaluator::finish`] checks that
/// a single result remains. [`evaluate_postfix`] does both.
#[derive(Debug, Default)]
pub struct Evaluator {
    stack: Vec<f64>,
}

impl Evaluator {
    /// Creates an evaluator with an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Applies one postfix token to the stack.
    ///
    /// Numbers are pushed. Operators pop their right operand, then their left
    /// one, and push the result. Functions pop a single argument.
    ///
    /// # Errors
    /// - `InsufficientOperands` if the stack holds too few values.
    /// - `DivisionByZero` and `UndefinedTangent` from the operation itself.
    /// - `UnexpectedToken` for parentheses and identifiers, which never occur
    ///   in a valid postfix sequence.
    pub fn step(&mut self, token: &Token) -> EvalResult<()> {
        let value = match token {
            Token::Number(value) => *value,
            Token::Operator(op) => {
                let symbol = op.to_string();
                let right = self.pop(&symbol)?;
                let left = self.pop(&symbol)?;
                Self::eval_binary(*op, left, right)?
            },
            Token::Function(function) => {
                let argument = self.pop(function.name())?;
                Self::eval_function(*function, argument)?
            },
            Token::Identifier(_) | Token::LeftParen | Token::RightParen => {
                return Err(RuntimeError::UnexpectedToken { token: token.to_string() });
            },
        };

        trace!("{token} -> push {value:?}");
        self.stack.push(value);
        Ok(())
    }

    /// Consumes the evaluator and returns the single remaining value.
    ///
    /// # Errors
    /// `MalformedExpression` if the stack holds zero or several values.
    pub fn finish(mut self) -> EvalResult<f64> {
        match (self.stack.pop(), self.stack.is_empty()) {
            (Some(value), true) => Ok(value),
            (None, _) => Err(RuntimeError::MalformedExpression { values: 0 }),
            (Some(_), false) => {
                Err(RuntimeError::MalformedExpression { values: self.stack.len() + 1 })
            },
        }
    }

    fn pop(&mut self, symbol: &str) -> EvalResult<f64> {
        self.stack
            .pop()
            .ok_or_else(|| RuntimeError::InsufficientOperands { symbol: symbol.to_string() })
    }
}

/// Evaluates a postfix token sequence.
///
/// # Parameters
/// - `tokens`: Tokens in postfix order, as produced by
///   [`to_postfix`](crate::interpreter::converter::to_postfix).
///
/// # Returns
/// The value of the expression.
///
/// # Errors
/// Returns the first error raised by [`Evaluator::step`], or
/// `MalformedExpression` if the sequence does not reduce to one value.
///
/// # Example
/// ```
/// use rpncalc::{
///     interpreter::evaluator::core::evaluate_postfix,
///     token::{Operator, Token},
/// };
///
/// // 10 4 -  ->  6
/// let tokens = [Token::Number(10.0), Token::Number(4.0), Token::Operator(Operator::Sub)];
/// assert_eq!(evaluate_postfix(&tokens).unwrap(), 6.0);
/// ```
pub fn evaluate_postfix(tokens: &[Token]) -> EvalResult<f64> {
    let mut evaluator = Evaluator::new();

    for token in tokens {
        evaluator.step(token)?;
    }

    let result = evaluator.finish()?;
    debug!("evaluated {} postfix tokens to {result:?}", tokens.len());
    Ok(result)
}
