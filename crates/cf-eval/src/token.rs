//! Formula lexer.
//!
//! Identifiers are lexed as whole tokens (`[A-Za-z_][A-Za-z0-9_]*`), so a
//! parameter name can never be matched inside a longer name; string-level
//! substitution and its prefix-collision hazard do not exist here. Any
//! character outside the arithmetic whitelist fails the whole formula.

use crate::error::{EvalError, EvalResult};

/// Kind of a lexed token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Numeric literal, e.g. `1.05`
    Number(f64),
    /// Parameter reference, e.g. `san_nha`
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

/// One token with its character offset in the source formula.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

/// Lex `formula` into tokens, rejecting any character outside the
/// whitelist `0-9 a-z A-Z _ . + - * / ( )` and whitespace.
pub fn tokenize(formula: &str) -> EvalResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = formula.chars().collect();
    let mut pos = 0;

    while pos < chars.len() {
        let c = chars[pos];
        let start = pos;

        match c {
            c if c.is_whitespace() => {
                pos += 1;
            }
            '+' => {
                tokens.push(Token { kind: TokenKind::Plus, position: start });
                pos += 1;
            }
            '-' => {
                tokens.push(Token { kind: TokenKind::Minus, position: start });
                pos += 1;
            }
            '*' => {
                tokens.push(Token { kind: TokenKind::Star, position: start });
                pos += 1;
            }
            '/' => {
                tokens.push(Token { kind: TokenKind::Slash, position: start });
                pos += 1;
            }
            '(' => {
                tokens.push(Token { kind: TokenKind::LParen, position: start });
                pos += 1;
            }
            ')' => {
                tokens.push(Token { kind: TokenKind::RParen, position: start });
                pos += 1;
            }
            '0'..='9' | '.' => {
                let mut end = pos;
                while end < chars.len() && (chars[end].is_ascii_digit() || chars[end] == '.') {
                    end += 1;
                }
                let text: String = chars[pos..end].iter().collect();
                let value: f64 = text.parse().map_err(|_| {
                    EvalError::malformed(format!("invalid number '{text}'"), start)
                })?;
                tokens.push(Token { kind: TokenKind::Number(value), position: start });
                pos = end;
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut end = pos;
                while end < chars.len()
                    && (chars[end].is_ascii_alphanumeric() || chars[end] == '_')
                {
                    end += 1;
                }
                let name: String = chars[pos..end].iter().collect();
                tokens.push(Token { kind: TokenKind::Ident(name), position: start });
                pos = end;
            }
            other => {
                return Err(EvalError::malformed(
                    format!("character '{other}' is not allowed in formulas"),
                    start,
                ));
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
