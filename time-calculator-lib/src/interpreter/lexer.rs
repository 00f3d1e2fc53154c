use crate::interpreter::error::EvaluationError;
use crate::interpreter::literal::{is_literal_char, is_valid_literal, parse_literal};
use crate::interpreter::token::Token;
use crate::interpreter::Strictness;
use anyhow::{bail, Result};
use log::trace;
use std::iter::Peekable;
use std::str::Chars;

/// Splits the given expression into tokens.
///
/// Whitespace is dropped, each operator or parenthesis becomes its own token
/// and every maximal run of digits, `.` and `:` becomes one literal.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
/// * `strictness`: Whether unknown characters and invalid literals are
///   skipped and propagated as `NaN`, or rejected.
///
/// returns: The tokens of the expression, in the order they appear.
///
/// # Examples
///
/// ```
/// use time_calculator::interpreter::lexer::tokenize;
/// use time_calculator::interpreter::token::Token;
/// use time_calculator::interpreter::Strictness;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = tokenize("8:30 + 1", Strictness::Lenient)?;
/// assert!(tokens == vec![Token::Literal(8.5), Token::Plus, Token::Literal(1.0)]);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokenize(expression: &str, strictness: Strictness) -> Result<Vec<Token>> {
    let mut tokens = vec![];
    let mut characters = expression.chars().peekable();

    while let Some(&character) = characters.peek() {
        if character.is_whitespace() {
            characters.next();
        } else if let Some(token) = Token::from_symbol(character) {
            characters.next();
            tokens.push(token);
        } else if is_literal_char(character) {
            tokens.push(read_literal(&mut characters, strictness)?);
        } else {
            if strictness == Strictness::Strict {
                bail!(EvaluationError::UnsupportedCharacter(character));
            }
            trace!("Skipping unsupported character {:?}", character);
            characters.next();
        }
    }

    trace!("Tokenized {:?} into {:?}", expression, tokens);
    Ok(tokens)
}

fn read_literal(characters: &mut Peekable<Chars>, strictness: Strictness) -> Result<Token> {
    let mut text = String::new();
    while let Some(character) = characters.next_if(|&character| is_literal_char(character)) {
        text.push(character);
    }

    if strictness == Strictness::Strict && !is_valid_literal(&text) {
        bail!(EvaluationError::InvalidNumericLiteral(text));
    }
    Ok(Token::Literal(parse_literal(&text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lenient(expression: &str) -> Vec<Token> {
        tokenize(expression, Strictness::Lenient).unwrap()
    }

    fn strict_error(expression: &str) -> EvaluationError {
        tokenize(expression, Strictness::Strict)
            .unwrap_err()
            .downcast::<EvaluationError>()
            .unwrap()
    }

    #[test]
    fn empty_and_whitespace_input_yield_no_tokens() {
        assert_eq!(lenient(""), Vec::<Token>::new());
        assert_eq!(lenient(" \t\n "), Vec::<Token>::new());
    }

    #[test]
    fn operators_and_parentheses_become_single_tokens() {
        let expected = vec![
            Token::OpenParenthesis,
            Token::Literal(2.0),
            Token::Plus,
            Token::Literal(3.0),
            Token::CloseParenthesis,
            Token::Asterisk,
            Token::Dash,
            Token::Literal(4.0),
            Token::ForwardSlash,
            Token::Literal(0.5),
        ];

        assert_eq!(lenient("(2+3)*-4/0.5"), expected);
    }

    #[test]
    fn whitespace_separates_literals() {
        assert_eq!(lenient("1 2"), vec![Token::Literal(1.0), Token::Literal(2.0)]);
    }

    #[test]
    fn time_literals_are_converted_to_hours() {
        let expected = vec![Token::Literal(8.5), Token::Plus, Token::Literal(1.75)];

        assert_eq!(lenient("8:30 + 1:45"), expected);
    }

    #[test]
    fn unsupported_characters_are_skipped_when_lenient() {
        let expected = vec![Token::Literal(2.0), Token::Plus, Token::Literal(3.0)];

        assert_eq!(lenient("2h + 3h"), expected);
        assert_eq!(lenient("x"), Vec::<Token>::new());
    }

    #[test]
    fn invalid_literal_becomes_nan_when_lenient() {
        let tokens = lenient("1.2.3 + 1");

        assert_eq!(tokens.len(), 3);
        assert!(tokens[0].literal_value().unwrap().is_nan());
    }

    #[test]
    fn unsupported_character_is_rejected_when_strict() {
        assert_eq!(strict_error("2h"), EvaluationError::UnsupportedCharacter('h'));
    }

    #[test]
    fn invalid_literal_is_rejected_when_strict() {
        assert_eq!(
            strict_error("1:30:00"),
            EvaluationError::InvalidNumericLiteral("1:30:00".to_string())
        );
    }
}
