use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

pub const ADDITIVE: u8 = 0;
pub const MULTIPLICATIVE: u8 = 1;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// An unary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
}

impl UnaryOperator {
    pub fn token(&self) -> Token {
        match self {
            UnaryOperator::Negate => Token::Dash,
        }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            UnaryOperator::Negate => -x,
        }
    }
}

impl BinaryOperator {
    pub fn token(&self) -> Token {
        match self {
            BinaryOperator::Add => Token::Plus,
            BinaryOperator::Subtract => Token::Dash,
            BinaryOperator::Multiply => Token::Asterisk,
            BinaryOperator::Divide => Token::ForwardSlash,
        }
    }

    pub fn from_token(token: &Token) -> Option<BinaryOperator> {
        match token {
            Token::Plus => Some(BinaryOperator::Add),
            Token::Dash => Some(BinaryOperator::Subtract),
            Token::Asterisk => Some(BinaryOperator::Multiply),
            Token::ForwardSlash => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    /// [`ADDITIVE`] for `+` and `-`, [`MULTIPLICATIVE`] for `*` and `/`.
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => ADDITIVE,
            BinaryOperator::Multiply | BinaryOperator::Divide => MULTIPLICATIVE,
        }
    }

    /// Applies the operator with IEEE 754 semantics, so dividing by zero
    /// gives an infinity (or `NaN` for `0 / 0`) rather than an error.
    pub fn evaluate(&self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOperator::Add => a + b,
            BinaryOperator::Subtract => a - b,
            BinaryOperator::Multiply => a * b,
            BinaryOperator::Divide => a / b,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
