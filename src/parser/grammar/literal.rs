//! Literal parsers: identifiers, integers, characters and booleans

use lachs::Span;

use crate::ast::{Literal, LiteralValue};
use crate::lexer::Token;

use crate::parser::combinators::{BoxedParser, token_with_error};
use crate::parser::state::ParseError;

/// An identifier with its position; `::` paths are a single identifier.
pub fn ident() -> BoxedParser<(String, Span)> {
    token_with_error(|t| matches!(t, Token::Ident(_)), "identifier").try_map(|tok| match tok {
        Token::Ident(id) => Ok((id.value, id.position)),
        other => Err(mismatch("identifier", &other)),
    })
}

pub fn integer() -> BoxedParser<Literal> {
    token_with_error(|t| matches!(t, Token::Integer(_)), "integer").try_map(|tok| match tok {
        Token::Integer(int) => {
            let value = int.value.parse::<i128>().map_err(|_| {
                ParseError::new("integer literal out of range").at(int.position.clone())
            })?;
            Ok(Literal {
                value: LiteralValue::Integer(value),
                position: int.position,
            })
        }
        other => Err(mismatch("integer", &other)),
    })
}

/// A non-negative integer, used for array extents.
pub fn extent() -> BoxedParser<u64> {
    integer().try_map(|literal| match literal.value {
        LiteralValue::Integer(value) => u64::try_from(value).map_err(|_| {
            ParseError::new("array extent must be non-negative").at(literal.position)
        }),
        _ => Err(ParseError::new("expected an array extent").at(literal.position)),
    })
}

pub fn character() -> BoxedParser<Literal> {
    token_with_error(|t| matches!(t, Token::CharLiteral(_)), "character").try_map(|tok| {
        match tok {
            Token::CharLiteral(c) => {
                let value = unescape(&c.value).ok_or_else(|| {
                    ParseError::new("unsupported character literal").at(c.position.clone())
                })?;
                Ok(Literal {
                    value: LiteralValue::Char(value),
                    position: c.position,
                })
            }
            other => Err(mismatch("character", &other)),
        }
    })
}

pub fn boolean() -> BoxedParser<Literal> {
    token_with_error(|t| matches!(t, Token::True(_) | Token::False(_)), "boolean").try_map(
        |tok| match tok {
            Token::True(t) => Ok(Literal {
                value: LiteralValue::Bool(true),
                position: t.position,
            }),
            Token::False(f) => Ok(Literal {
                value: LiteralValue::Bool(false),
                position: f.position,
            }),
            other => Err(mismatch("boolean", &other)),
        },
    )
}

/// The byte a quoted character literal such as `'a'` or `'\n'` stands for.
fn unescape(quoted: &str) -> Option<u8> {
    let inner = quoted.strip_prefix('\'')?.strip_suffix('\'')?;
    let byte = match inner.as_bytes() {
        [b'\\', b'n'] => b'\n',
        [b'\\', b't'] => b'\t',
        [b'\\', b'0'] => 0,
        [b'\\', escaped @ (b'\\' | b'\'' | b'"')] => *escaped,
        [byte] if byte.is_ascii() => *byte,
        _ => return None,
    };
    Some(byte)
}

fn mismatch(expected: &str, found: &Token) -> ParseError {
    ParseError::new("unexpected token")
        .expected(expected)
        .found(found.describe())
        .at(found.pos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape() {
        assert_eq!(unescape("'a'"), Some(b'a'));
        assert_eq!(unescape(r"'\n'"), Some(b'\n'));
        assert_eq!(unescape(r"'\''"), Some(b'\''));
        assert_eq!(unescape("'ab'"), None);
    }
}
