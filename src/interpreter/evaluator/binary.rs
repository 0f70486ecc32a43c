use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    token::Operator,
};

impl Evaluator {
    /// Evaluates `left op right`.
    ///
    /// Division by a right operand equal to zero (of either sign) is an error
    /// instead of an infinite or NaN result.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{interpreter::evaluator::core::Evaluator, token::Operator};
    ///
    /// assert_eq!(Evaluator::eval_binary(Operator::Div, 7.0, 2.0).unwrap(), 3.5);
    /// assert!(Evaluator::eval_binary(Operator::Div, 7.0, 0.0).is_err());
    /// ```
    pub fn eval_binary(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
        Ok(match op {
               Operator::Add => left + right,
               Operator::Sub => left - right,
               Operator::Mul => left * right,
               Operator::Div => {
                   if right == 0.0 {
                       return Err(RuntimeError::DivisionByZero);
                   }
                   left / right
               },
           })
    }
}
