use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    token::Function,
};

/// Below this absolute cosine, a tangent argument counts as an odd multiple
/// of 90 degrees.
pub const TANGENT_TOLERANCE: f64 = 1e-9;

impl Evaluator {
    /// Applies a trigonometric function to an angle given in degrees.
    ///
    /// # Parameters
    /// - `function`: The function to apply.
    /// - `degrees`: The argument, in degrees.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the computed value.
    ///
    /// # Errors
    /// `UndefinedTangent` when `function` is `tan` and the cosine of the
    /// angle is within [`TANGENT_TOLERANCE`] of zero.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{interpreter::evaluator::core::Evaluator, token::Function};
    ///
    /// let r = Evaluator::eval_function(Function::Cos, 180.0).unwrap();
    /// assert!((r + 1.0).abs() < 1e-12);
    ///
    /// assert!(Evaluator::eval_function(Function::Tan, 270.0).is_err());
    /// ```
    pub fn eval_function(function: Function, degrees: f64) -> EvalResult<f64> {
        let radians = degrees.to_radians();

        match function {
            Function::Sin => Ok(radians.sin()),
            Function::Cos => Ok(radians.cos()),
            Function::Tan => {
                if radians.cos().abs() < TANGENT_TOLERANCE {
                    return Err(RuntimeError::UndefinedTangent { degrees });
                }
                Ok(radians.tan())
            },
        }
    }
}
