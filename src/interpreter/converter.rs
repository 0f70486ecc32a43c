use log::{debug, trace};

use crate::{
    error::ParseError,
    token::{Associativity, Operator, Token},
};

/// Result type used by the tokenizer and the converter.
pub type ParseResult<T> = Result<T, ParseError>;

/// Converts an infix token sequence into postfix (Reverse Polish) order.
///
/// This is the shunting-yard algorithm. Numbers go straight to the output;
/// operators, functions and `(` wait on a stack until precedence or a closing
/// parenthesis releases them. A function is released right after the `)` that
/// closes its argument.
///
/// # Parameters
/// - `tokens`: Tokens in source order, as produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// A sequence holding only `Number`, `Operator` and `Function` tokens.
///
/// # Errors
/// - `UnmatchedClosingParen` if a `)` has no matching `(`.
/// - `UnmatchedOpeningParen` if a `(` is never closed.
/// - `InvalidToken` for an identifier that names no known function.
///
/// # Example
/// ```
/// use rpncalc::{
///     interpreter::converter::to_postfix,
///     token::{Operator, Token},
/// };
///
/// // 1 + 2 * 3  ->  1 2 3 * +
/// let infix = vec![Token::Number(1.0),
///                  Token::Operator(Operator::Add),
///                  Token::Number(2.0),
///                  Token::Operator(Operator::Mul),
///                  Token::Number(3.0)];
///
/// let postfix = to_postfix(infix).unwrap();
/// assert_eq!(postfix,
///            vec![Token::Number(1.0),
///                 Token::Number(2.0),
///                 Token::Number(3.0),
///                 Token::Operator(Operator::Mul),
///                 Token::Operator(Operator::Add)]);
/// ```
pub fn to_postfix(tokens: Vec<Token>) -> ParseResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Function(_) | Token::LeftParen => stack.push(token),
            Token::Operator(op) => {
                while let Some(Token::Operator(top)) = stack.last()
                      && should_pop(*top, op)
                {
                    trace!("popping {top} before {op}");
                    output.push(Token::Operator(*top));
                    stack.pop();
                }
                stack.push(token);
            },
            Token::RightParen => {
                close_group(&mut stack, &mut output)?;
            },
            Token::Identifier(name) => return Err(ParseError::InvalidToken { token: name }),
        }
    }

    while let Some(token) = stack.pop() {
        if token == Token::LeftParen {
            return Err(ParseError::UnmatchedOpeningParen);
        }
        output.push(token);
    }

    debug!("postfix: {output:?}");
    Ok(output)
}

/// Whether `top`, sitting on the operator stack, must be output before `incoming`
/// is pushed.
const fn should_pop(top: Operator, incoming: Operator) -> bool {
    top.precedence() > incoming.precedence()
    || (top.precedence() == incoming.precedence()
        && matches!(incoming.associativity(), Associativity::Left))
}

/// Handles a `)`: moves everything above the matching `(` to the output,
/// drops the `(`, then releases a function waiting directly beneath it.
fn close_group(stack: &mut Vec<Token>, output: &mut Vec<Token>) -> ParseResult<()> {
    loop {
        match stack.pop() {
            Some(Token::LeftParen) => break,
            Some(token) => output.push(token),
            None => return Err(ParseError::UnmatchedClosingParen),
        }
    }

    if let Some(Token::Function(function)) = stack.last() {
        trace!("applying {function} to closed group");
        output.push(Token::Function(*function));
        stack.pop();
    }

    Ok(())
}
