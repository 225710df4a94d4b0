//! SI signature lexer. Tokenizes strings such as `"kgm2/s3A2"` or `"kg.m2.s-3.A-2"`.

use smallvec::SmallVec;

use super::BaseDimension;
use crate::{Error, Result};

/// A token from the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Source span (byte offsets).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A base-dimension symbol (`kg`, `m`, `s`, ...).
    Symbol(BaseDimension),
    /// A signed integer exponent (`2`, `-3`).
    Integer(i32),
    /// The numerator/denominator separator.
    Slash,
    Eof,
}

/// Signature tokens rarely exceed a dozen entries.
pub type Tokens = SmallVec<[Token; 12]>;

/// Symbols in longest-match order: `mol` before `m`, `sr` before `s`.
const SYMBOLS: [(&str, BaseDimension); 10] = [
    ("mol", BaseDimension::AmountOfSubstance),
    ("rad", BaseDimension::Angle),
    ("kg", BaseDimension::Mass),
    ("sr", BaseDimension::SolidAngle),
    ("cd", BaseDimension::LuminousIntensity),
    ("m", BaseDimension::Length),
    ("s", BaseDimension::Time),
    ("A", BaseDimension::Current),
    ("K", BaseDimension::Temperature),
    ("$", BaseDimension::Money),
];

/// Tokenize an SI signature string.
pub fn tokenize(input: &str) -> Result<Tokens> {
    let mut tokens = Tokens::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(pos, ch)) = chars.peek() {
        match ch {
            // Separators: "kg.m2", "s^2", "kg m"
            c if c.is_whitespace() => { chars.next(); }
            '.' | '^' | '*' | '·' => { chars.next(); }

            '/' => {
                chars.next();
                tokens.push(Token { kind: TokenKind::Slash, span: Span { start: pos, end: pos + 1 } });
            }

            // Exponents, optionally negative
            c if c == '-' || c.is_ascii_digit() => {
                let start = pos;
                let mut num = String::new();
                if c == '-' {
                    num.push('-');
                    chars.next();
                }
                while let Some(&(_, d)) = chars.peek() {
                    if d.is_ascii_digit() {
                        num.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if num == "-" {
                    return Err(syntax(input, start, "minus sign without an exponent"));
                }
                let value: i32 = num.parse().map_err(|_| {
                    syntax(input, start, &format!("exponent '{num}' out of range"))
                })?;
                tokens.push(Token {
                    kind: TokenKind::Integer(value),
                    span: Span { start, end: start + num.len() },
                });
            }

            _ => {
                let rest = &input[pos..];
                let Some((text, dim)) = SYMBOLS.iter().find(|(s, _)| rest.starts_with(s)) else {
                    return Err(syntax(input, pos, &format!("unknown dimension symbol at '{rest}'")));
                };
                for _ in 0..text.chars().count() {
                    chars.next();
                }
                tokens.push(Token {
                    kind: TokenKind::Symbol(*dim),
                    span: Span { start: pos, end: pos + text.len() },
                });
            }
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span { start: input.len(), end: input.len() },
    });

    Ok(tokens)
}

fn syntax(signature: &str, position: usize, message: &str) -> Error {
    Error::SyntaxError {
        signature: signature.to_string(),
        position,
        message: message.to_string(),
    }
}
