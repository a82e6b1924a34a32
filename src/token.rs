//! Tokenizer for Boolean expressions.
//!
//! The accepted alphabet is small:
//!
//! | Input         | Token                         |
//! |---------------|-------------------------------|
//! | `A`..`Z`, `a`..`z` | [`Token::Ident`] (one letter = one variable) |
//! | `+`           | [`Token::Or`]                 |
//! | `.`           | [`Token::And`]                |
//! | `~`           | [`Token::NotPrefix`]          |
//! | `'`           | [`Token::NotPostfix`]         |
//! | `(` / `)`     | [`Token::LParen`] / [`Token::RParen`] |
//!
//! Whitespace is skipped. Typographic variants are normalized first, see [`normalize`].

use std::fmt;

use log::debug;

use crate::error::ParseError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Token {
    Ident(char),
    Or,
    And,
    NotPrefix,
    NotPostfix,
    LParen,
    RParen,
    Eof,
}

impl Token {
    /// Returns true if this token can begin a new AND factor.
    ///
    /// Used by the parser to insert an implicit AND between adjacent factors.
    pub fn starts_factor(self) -> bool {
        matches!(self, Token::Ident(_) | Token::LParen | Token::NotPrefix)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(c) => write!(f, "identifier '{}'", c),
            Token::Or => write!(f, "'+'"),
            Token::And => write!(f, "'.'"),
            Token::NotPrefix => write!(f, "'~'"),
            Token::NotPostfix => write!(f, "'''"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::Eof => write!(f, "end of input"),
        }
    }
}

/// Replaces typographic variants with their ASCII counterparts.
///
/// - `’` (U+2019), `′` (U+2032) and `ʼ` (U+02BC) become `'`
/// - `·` (U+00B7) becomes `.`
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\u{2019}' | '\u{2032}' | '\u{02BC}' => '\'',
            '\u{00B7}' => '.',
            c => c,
        })
        .collect()
}

/// Splits the input into tokens, always terminated by [`Token::Eof`].
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let input = normalize(input);
    let mut tokens = Vec::with_capacity(input.len() + 1);

    for (pos, c) in input.chars().enumerate() {
        let token = match c {
            ' ' | '\t' | '\n' | '\r' => continue,
            '+' => Token::Or,
            '.' => Token::And,
            '~' => Token::NotPrefix,
            '\'' => Token::NotPostfix,
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if c.is_ascii_alphabetic() => Token::Ident(c),
            ch => return Err(ParseError::UnexpectedChar { ch, pos }),
        };
        tokens.push(token);
    }
    tokens.push(Token::Eof);

    debug!("tokenize: {} tokens", tokens.len());
    Ok(tokens)
}
