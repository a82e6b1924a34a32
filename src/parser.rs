//! Recursive-descent parser for Boolean expressions.
//!
//! Grammar, from lowest to highest precedence:
//!
//! ```text
//! or      := and ('+' and)*
//! and     := not (('.' | <adjacent factor>) not)*
//! not     := '~'* primary
//! primary := (ident | '(' or ')') "'"*
//! ```
//!
//! Adjacency implies AND: `AB` is `A.B`, and `(A+B)(A+C)` is a product of two sums.
//! The root of a parsed tree is always an [`Node::Or`], possibly with a single child.
//!
//! Nesting is bounded by [`MAX_DEPTH`]: more open parentheses than that, or a
//! postfix `'` that would make the tree taller than that, fails with
//! [`ParseError::TooDeep`].

use log::debug;

use crate::ast::Node;
use crate::error::ParseError;
use crate::token::{tokenize, Token};

/// Deepest nesting accepted by [`parse`].
pub const MAX_DEPTH: usize = 256;

/// Parses an expression into a tree rooted at an `Or` node.
pub fn parse(input: &str) -> Result<Node, ParseError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser::new(&tokens);
    let root = parser.parse_or()?;
    match parser.peek() {
        Token::Eof => {
            debug!("parse: {:?} -> {}", input, root);
            Ok(root)
        }
        found => Err(ParseError::TrailingInput { found }),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Open parentheses around the current position.
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0, depth: 0 }
    }

    fn peek(&self) -> Token {
        self.tokens.get(self.pos).copied().unwrap_or(Token::Eof)
    }

    fn bump(&mut self) -> Token {
        let token = self.peek();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        let found = self.bump();
        if found == expected {
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken { expected, found })
        }
    }

    fn parse_or(&mut self) -> Result<Node, ParseError> {
        let mut terms = vec![self.parse_and()?];
        while self.peek() == Token::Or {
            self.bump();
            terms.push(self.parse_and()?);
        }
        Ok(Node::or(terms))
    }

    fn parse_and(&mut self) -> Result<Node, ParseError> {
        let mut factors = vec![self.parse_not()?];
        loop {
            match self.peek() {
                Token::And => {
                    self.bump();
                    factors.push(self.parse_not()?);
                }
                t if t.starts_factor() => {
                    factors.push(self.parse_not()?);
                }
                _ => break,
            }
        }
        if factors.len() == 1 {
            Ok(factors.swap_remove(0))
        } else {
            Ok(Node::and(factors))
        }
    }

    fn parse_not(&mut self) -> Result<Node, ParseError> {
        let mut negations = 0usize;
        while self.peek() == Token::NotPrefix {
            self.bump();
            negations += 1;
        }
        let node = self.parse_primary()?;
        if negations % 2 == 1 {
            Ok(Node::not(node))
        } else {
            Ok(node)
        }
    }

    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        let mut node = match self.peek() {
            Token::Ident(name) => {
                self.bump();
                Node::var(name)
            }
            Token::LParen => {
                self.bump();
                self.depth += 1;
                if self.depth > MAX_DEPTH {
                    return Err(ParseError::TooDeep { depth: self.depth });
                }
                let inner = self.parse_or()?;
                self.expect(Token::RParen)?;
                self.depth -= 1;
                inner
            }
            found => return Err(ParseError::UnexpectedPrimary { found }),
        };
        if self.peek() == Token::NotPostfix {
            let mut height = node.height();
            while self.peek() == Token::NotPostfix {
                self.bump();
                height += 1;
                if height > MAX_DEPTH {
                    return Err(ParseError::TooDeep { depth: height });
                }
                node = Node::not(node);
            }
        }
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn var(c: char) -> Node {
        Node::var(c)
    }

    #[test]
    fn test_parse_single_var_is_wrapped() {
        assert_eq!(parse("A").unwrap(), Node::Or(vec![var('A')]));
    }

    #[test]
    fn test_parse_implicit_and() {
        let expected = Node::Or(vec![
            Node::And(vec![Node::not(var('A')), var('B')]),
            Node::And(vec![var('A'), Node::not(var('B'))]),
        ]);
        assert_eq!(parse("A'B + AB'").unwrap(), expected);
    }

    #[test]
    fn test_parse_explicit_and() {
        assert_eq!(parse("A.B").unwrap(), parse("AB").unwrap());
        assert_eq!(parse("A \u{00B7} B").unwrap(), parse("AB").unwrap());
    }

    #[test]
    fn test_parse_product_of_sums() {
        let expected = Node::Or(vec![Node::And(vec![
            Node::Or(vec![var('X'), var('Y')]),
            Node::Or(vec![var('X'), var('Z')]),
        ])]);
        assert_eq!(parse("(X+Y)(X+Z)").unwrap(), expected);
    }

    #[test]
    fn test_parse_or_is_flattened() {
        // A parenthesized sum standing alone as a term is spliced into the root.
        let expected = Node::Or(vec![var('A'), var('B'), var('C')]);
        assert_eq!(parse("(A + B) + C").unwrap(), expected);
    }

    #[test]
    fn test_parse_and_is_flattened() {
        let node = parse("A.B.C D").unwrap();
        assert_eq!(node, Node::Or(vec![Node::And(vec![var('A'), var('B'), var('C'), var('D')])]));
    }

    #[test]
    fn test_parse_prefix_not_parity() {
        assert_eq!(parse("~A").unwrap(), Node::Or(vec![Node::not(var('A'))]));
        assert_eq!(parse("~~A").unwrap(), Node::Or(vec![var('A')]));
        assert_eq!(parse("~~~A").unwrap(), Node::Or(vec![Node::not(var('A'))]));
    }

    #[test]
    fn test_parse_postfix_not_stacks() {
        assert_eq!(parse("A''").unwrap(), Node::Or(vec![Node::not(Node::not(var('A')))]));
        assert_eq!(
            parse("(A+B)'").unwrap(),
            Node::Or(vec![Node::not(Node::Or(vec![var('A'), var('B')]))])
        );
    }

    #[test]
    fn test_parse_prefix_not_as_adjacent_factor() {
        let expected = Node::Or(vec![var('A'), Node::And(vec![var('A'), Node::not(var('B'))])]);
        assert_eq!(parse("A + A~B").unwrap(), expected);
    }

    #[test]
    fn test_parse_missing_rparen() {
        let err = parse("(A + B").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                expected: Token::RParen,
                found: Token::Eof
            }
        );
    }

    #[test]
    fn test_parse_unexpected_primary() {
        assert_eq!(parse("").unwrap_err(), ParseError::UnexpectedPrimary { found: Token::Eof });
        assert_eq!(parse("A + + B").unwrap_err(), ParseError::UnexpectedPrimary { found: Token::Or });
        assert_eq!(parse("'A").unwrap_err(), ParseError::UnexpectedPrimary { found: Token::NotPostfix });
    }

    #[test]
    fn test_parse_trailing_input() {
        assert_eq!(parse("A)").unwrap_err(), ParseError::TrailingInput { found: Token::RParen });
    }

    #[test]
    fn test_parse_bad_char() {
        assert_eq!(parse("A & B").unwrap_err(), ParseError::UnexpectedChar { ch: '&', pos: 2 });
    }

    fn nested(depth: usize) -> String {
        format!("{}A{}", "(".repeat(depth), ")".repeat(depth))
    }

    #[test]
    fn test_parse_nesting_limit() {
        assert_eq!(parse(&nested(100)).unwrap(), Node::Or(vec![var('A')]));
        assert_eq!(parse(&nested(MAX_DEPTH)).unwrap(), Node::Or(vec![var('A')]));
        assert_eq!(
            parse(&nested(MAX_DEPTH + 1)).unwrap_err(),
            ParseError::TooDeep { depth: MAX_DEPTH + 1 }
        );
        assert_eq!(
            parse(&nested(1000)).unwrap_err(),
            ParseError::TooDeep { depth: MAX_DEPTH + 1 }
        );
    }

    #[test]
    fn test_parse_postfix_chain_limit() {
        let ok = format!("A{}", "'".repeat(MAX_DEPTH - 1));
        assert_eq!(parse(&ok).unwrap().height(), MAX_DEPTH + 1);

        let long = format!("A{}", "'".repeat(MAX_DEPTH));
        assert_eq!(parse(&long).unwrap_err(), ParseError::TooDeep { depth: MAX_DEPTH + 1 });
        let huge = format!("A{}", "'".repeat(100_000));
        assert!(matches!(parse(&huge), Err(ParseError::TooDeep { .. })));

        // Chains on both sides of a group add up.
        let split = format!("(A{}){}", "'".repeat(200), "'".repeat(200));
        assert!(matches!(parse(&split), Err(ParseError::TooDeep { .. })));
    }

    #[test]
    fn test_display_reparses() {
        for input in ["(X+Y)(X+Z)", "A'B + AB' + AB", "~A + A~B", "(A + B')(A' + C) + AC'", "((A+B)'C)''"] {
            let node = parse(input).unwrap();
            let printed = node.to_string();
            assert_eq!(parse(&printed).unwrap(), node, "{} printed as {}", input, printed);
        }
    }
}
