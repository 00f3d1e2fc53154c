use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression.
#[derive(Clone, Copy, PartialEq)]
pub enum Token {
    /// A quantity of hours, either a decimal number or a converted `HH:MM` literal.
    Literal(f64),
    Plus,
    Dash,
    Asterisk,
    ForwardSlash,
    OpenParenthesis,
    CloseParenthesis,
}

pub static SYMBOLS: [char; 6] = ['+', '-', '*', '/', '(', ')'];

impl Token {
    /// Looks up the single-character token for an operator or parenthesis symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use time_calculator::interpreter::token::Token;
    ///
    /// assert!(Token::from_symbol('*') == Some(Token::Asterisk));
    /// assert!(Token::from_symbol('x').is_none());
    /// ```
    pub fn from_symbol(symbol: char) -> Option<Token> {
        match symbol {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Dash),
            '*' => Some(Token::Asterisk),
            '/' => Some(Token::ForwardSlash),
            '(' => Some(Token::OpenParenthesis),
            ')' => Some(Token::CloseParenthesis),
            _ => None,
        }
    }

    pub fn literal_value(&self) -> Option<f64> {
        match self {
            Token::Literal(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(value) => write!(f, "{}", value),
            Token::Plus => write!(f, "+"),
            Token::Dash => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::ForwardSlash => write!(f, "/"),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_symbol_maps_to_a_token_that_displays_as_itself() {
        for symbol in SYMBOLS {
            let token = Token::from_symbol(symbol).unwrap();
            assert_eq!(token.to_string(), symbol.to_string());
        }
    }

    #[test]
    fn literal_displays_its_value() {
        assert_eq!(Token::Literal(8.5).to_string(), "8.5");
    }
}
