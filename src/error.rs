//! Error types for expression parsing and K-map geometry.

use thiserror::Error;

use crate::token::Token;

/// Errors that can occur while tokenizing or parsing a Boolean expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A character that is not part of the expression grammar.
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    /// A specific token was required but another one was found.
    #[error("expected {expected} but found {found}")]
    UnexpectedToken { expected: Token, found: Token },

    /// A token that cannot start a primary (variable or parenthesized group).
    #[error("unexpected {found} in primary")]
    UnexpectedPrimary { found: Token },

    /// Tokens left over after a complete expression.
    #[error("unexpected input after end of expression: {found}")]
    TrailingInput { found: Token },

    /// Parentheses or postfix negations nested past [`MAX_DEPTH`][crate::parser::MAX_DEPTH].
    #[error("expression nested too deeply ({depth} levels)")]
    TooDeep { depth: usize },
}

/// Errors related to K-map shapes and cell arrays.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// K-maps are only laid out for 2 to 6 variables.
    #[error("K-map supports 2 to 6 variables, got {0}")]
    UnsupportedVarCount(u32),

    /// The cell array does not hold exactly `2^n` values.
    #[error("expected {expected} cells but found {found}")]
    CellCountMismatch { expected: usize, found: usize },
}

/// Any error produced by this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// The truth table of the expression would be too large to enumerate.
    #[error("expression has {count} variables, at most {max} are supported")]
    TooManyVariables { count: usize, max: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
