use crate::interpreter::token::Token;
use thiserror::Error;

/// Why an expression could not be evaluated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error("empty input")]
    EmptyInput,

    #[error("malformed expression: unexpected end of input")]
    MalformedExpression,

    #[error("malformed expression: unexpected token '{0}'")]
    UnexpectedToken(Token),

    #[error("malformed expression: expected ')' but found '{0}'")]
    MissingClosingParenthesis(Token),

    #[error("malformed expression: parentheses nested deeper than {0} levels")]
    NestingTooDeep(usize),

    #[error("unsupported character: '{0}'")]
    UnsupportedCharacter(char),

    #[error("invalid number: '{0}'")]
    InvalidNumericLiteral(String),
}
