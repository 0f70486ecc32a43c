/// Core evaluation logic and the value stack.
///
/// Contains the postfix evaluation loop and final stack validation.
pub mod core;

/// Binary operator evaluation.
///
/// Applies `+`, `-`, `*` and `/` to two operands and reports division by zero.
pub mod binary;

/// Function evaluation.
///
/// Applies the degree-based trigonometric functions and reports undefined
/// tangents.
pub mod function;
