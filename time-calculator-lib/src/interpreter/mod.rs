pub mod error;
pub mod lexer;
pub mod literal;
mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::error::EvaluationError;
use anyhow::{bail, Result};
use log::debug;

/// How forgiving evaluation is towards input it does not understand.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Unknown characters are skipped, invalid literals evaluate to `NaN`,
    /// whatever stands in place of a closing parenthesis is consumed as one
    /// and trailing tokens are ignored.
    #[default]
    Lenient,
    /// Every one of those situations is an error.
    Strict,
}

/// Evaluates an arithmetic expression of decimal hours and `HH:MM` times.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, using `+ - * / ( )`.
///
/// returns: The exact, unrounded value of the expression in hours.
///
/// # Examples
///
/// ```
/// use time_calculator::interpreter::evaluate;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let hours = evaluate("8:30 + 1:45")?;
/// assert_eq!(hours, 10.25);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate(expression: &str) -> Result<f64> {
    evaluate_with(expression, Strictness::default())
}

/// Evaluates an expression the same way as [`evaluate`], with the given strictness.
///
/// # Examples
///
/// ```
/// use time_calculator::interpreter::error::EvaluationError;
/// use time_calculator::interpreter::{evaluate_with, Strictness};
///
/// let error = evaluate_with("2h + 3h", Strictness::Strict).unwrap_err();
/// assert_eq!(
///     error.downcast_ref::<EvaluationError>(),
///     Some(&EvaluationError::UnsupportedCharacter('h'))
/// );
/// ```
pub fn evaluate_with(expression: &str, strictness: Strictness) -> Result<f64> {
    let tokens = lexer::tokenize(expression, strictness)?;
    if tokens.is_empty() {
        bail!(EvaluationError::EmptyInput);
    }
    let value = parser::parse(&tokens, strictness)?;
    debug!("Evaluated {:?} to {} hours", expression, value);
    Ok(value)
}
