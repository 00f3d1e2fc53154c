use crate::interpreter::error::EvaluationError;
use crate::interpreter::operator::{BinaryOperator, UnaryOperator, ADDITIVE, MULTIPLICATIVE};
use crate::interpreter::token::Token;
use crate::interpreter::Strictness;
use anyhow::{bail, Result};
use log::trace;

/// How many parentheses may be open at once.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Evaluates the given tokens as an arithmetic expression.
///
/// # Arguments
///
/// * `tokens`: The tokens to evaluate, in infix format.
/// * `strictness`: Whether a missing `)` and trailing tokens are tolerated.
///
/// returns: The value of the expression, in hours.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use time_calculator::interpreter::parser::parse;
/// use time_calculator::interpreter::token::Token;
/// use time_calculator::interpreter::Strictness;
///
/// let tokens = vec![
///     Token::Literal(2.0),
///     Token::Plus,
///     Token::Literal(3.0),
///     Token::Asterisk,
///     Token::Literal(4.0),
/// ];
/// let value = parse(&tokens, Strictness::Lenient)?;
/// assert_eq!(value, 14.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse(tokens: &[Token], strictness: Strictness) -> Result<f64> {
    Parser::new(tokens, strictness).parse()
}

/// Recursive descent over
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := '(' expression ')' | '-' factor | NUMBER
/// ```
///
/// computing the value while parsing. The cursor lives only as long as
/// one evaluation. Runs of unary `-` are folded in a loop and parentheses
/// are limited to [`MAX_NESTING_DEPTH`], so the recursion stays shallow
/// whatever the input length.
pub struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    depth: usize,
    strictness: Strictness,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], strictness: Strictness) -> Self {
        Parser {
            tokens,
            position: 0,
            depth: 0,
            strictness,
        }
    }

    pub fn parse(mut self) -> Result<f64> {
        let value = self.expression()?;

        if self.strictness == Strictness::Strict {
            if let Some(&leftover) = self.tokens.get(self.position) {
                bail!(EvaluationError::UnexpectedToken(leftover));
            }
        }
        Ok(value)
    }

    fn expression(&mut self) -> Result<f64> {
        let mut left = self.term()?;
        while let Some(operator) = self.next_operator(ADDITIVE) {
            let right = self.term()?;
            trace!("{} {} {}", left, operator, right);
            left = operator.evaluate(left, right);
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<f64> {
        let mut left = self.factor()?;
        while let Some(operator) = self.next_operator(MULTIPLICATIVE) {
            let right = self.factor()?;
            trace!("{} {} {}", left, operator, right);
            left = operator.evaluate(left, right);
        }
        Ok(left)
    }

    fn factor(&mut self) -> Result<f64> {
        let mut negations = 0usize;
        let value = loop {
            match self.advance()? {
                Token::Dash => negations += 1,
                Token::OpenParenthesis => break self.parenthesized()?,
                Token::Literal(value) => break value,
                token => bail!(EvaluationError::UnexpectedToken(token)),
            }
        };

        if negations % 2 == 0 {
            return Ok(value);
        }
        trace!("{}{}", UnaryOperator::Negate, value);
        Ok(UnaryOperator::Negate.evaluate(value))
    }

    fn parenthesized(&mut self) -> Result<f64> {
        if self.depth == MAX_NESTING_DEPTH {
            bail!(EvaluationError::NestingTooDeep(MAX_NESTING_DEPTH));
        }
        self.depth += 1;
        let value = self.expression()?;
        self.close_parenthesis()?;
        self.depth -= 1;
        Ok(value)
    }

    // When lenient, whatever sits where the ')' belongs is consumed in its place.
    fn close_parenthesis(&mut self) -> Result<()> {
        let token = self.advance()?;
        if self.strictness == Strictness::Strict && token != Token::CloseParenthesis {
            bail!(EvaluationError::MissingClosingParenthesis(token));
        }
        Ok(())
    }

    /// Consumes the next token if it is a binary operator of the given precedence.
    fn next_operator(&mut self, precedence: u8) -> Option<BinaryOperator> {
        let operator = self
            .tokens
            .get(self.position)
            .and_then(BinaryOperator::from_token)
            .filter(|operator| operator.precedence() == precedence)?;
        self.position += 1;
        Some(operator)
    }

    fn advance(&mut self) -> Result<Token> {
        let token = *self
            .tokens
            .get(self.position)
            .ok_or(EvaluationError::MalformedExpression)?;
        self.position += 1;
        Ok(token)
    }
}
