//! Recursive-descent parser for the fixed arithmetic grammar.
//!
//! Binding-power style: `parse_expression(min_bp)` parses a prefix
//! expression, then loops consuming infix operators whose left binding
//! power is at least `min_bp`. Only `+ - * /`, unary minus/plus, and
//! parentheses exist; there are no function calls, so a sequence like
//! `f(x)` fails with a malformed-formula error instead of being invoked.

use crate::error::{EvalError, EvalResult};
use crate::token::{tokenize, Token, TokenKind};

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Parsed formula expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal
    Number(f64),
    /// Parameter reference, resolved at evaluation time
    Ident(String),
    /// Negation, e.g. `-san_nha`
    Neg(Box<Expr>),
    /// Binary operation
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

fn infix_binding_power(op: BinaryOp) -> (u8, u8) {
    match op {
        BinaryOp::Add | BinaryOp::Sub => (10, 11),
        BinaryOp::Mul | BinaryOp::Div => (20, 21),
    }
}

/// Parse `formula` into an [`Expr`], rejecting anything outside the
/// arithmetic grammar.
pub fn parse(formula: &str) -> EvalResult<Expr> {
    let tokens = tokenize(formula)?;
    if tokens.is_empty() {
        return Err(EvalError::malformed("empty formula", 0));
    }

    let mut parser = Parser::new(tokens, formula.chars().count());
    let expr = parser.parse_expression(0)?;

    if let Some(token) = parser.peek() {
        return Err(EvalError::malformed(
            format!("unexpected {}", describe(&token.kind)),
            token.position,
        ));
    }
    Ok(expr)
}

fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Number(n) => format!("number {n}"),
        TokenKind::Ident(name) => format!("identifier '{name}'"),
        TokenKind::Plus => "'+'".to_string(),
        TokenKind::Minus => "'-'".to_string(),
        TokenKind::Star => "'*'".to_string(),
        TokenKind::Slash => "'/'".to_string(),
        TokenKind::LParen => "'('".to_string(),
        TokenKind::RParen => "')'".to_string(),
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    end_position: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>, end_position: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            end_position,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn current_position(&self) -> usize {
        self.peek().map_or(self.end_position, |t| t.position)
    }

    fn parse_expression(&mut self, min_bp: u8) -> EvalResult<Expr> {
        let mut lhs = self.parse_prefix()?;

        loop {
            let op = match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Plus) => BinaryOp::Add,
                Some(TokenKind::Minus) => BinaryOp::Sub,
                Some(TokenKind::Star) => BinaryOp::Mul,
                Some(TokenKind::Slash) => BinaryOp::Div,
                _ => break,
            };

            let (l_bp, r_bp) = infix_binding_power(op);
            if l_bp < min_bp {
                break;
            }
            self.next(); // consume operator

            let rhs = self.parse_expression(r_bp)?;
            lhs = Expr::Binary {
                op,
                left: Box::new(lhs),
                right: Box::new(rhs),
            };
        }

        Ok(lhs)
    }

    fn parse_prefix(&mut self) -> EvalResult<Expr> {
        let position = self.current_position();
        let Some(token) = self.next() else {
            return Err(EvalError::malformed("expected an operand", position));
        };

        match token.kind {
            TokenKind::Number(value) => Ok(Expr::Number(value)),
            TokenKind::Ident(name) => {
                // An identifier followed by `(` would be a function call;
                // the grammar has none.
                if matches!(self.peek().map(|t| &t.kind), Some(TokenKind::LParen)) {
                    return Err(EvalError::malformed(
                        format!("function calls are not allowed ('{name}(...)')"),
                        token.position,
                    ));
                }
                Ok(Expr::Ident(name))
            }
            TokenKind::Minus => {
                let operand = self.parse_prefix()?;
                Ok(Expr::Neg(Box::new(operand)))
            }
            TokenKind::Plus => self.parse_prefix(),
            TokenKind::LParen => {
                let inner = self.parse_expression(0)?;
                match self.next() {
                    Some(Token {
                        kind: TokenKind::RParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(EvalError::malformed(
                        format!("expected ')', found {}", describe(&other.kind)),
                        other.position,
                    )),
                    None => Err(EvalError::malformed(
                        "unbalanced parentheses",
                        self.end_position,
                    )),
                }
            }
            other => Err(EvalError::malformed(
                format!("expected an operand, found {}", describe(&other)),
                token.position,
            )),
        }
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
