use std::ops::{Add, BitOr, Mul, Shr};
use std::rc::Rc;

use crate::lexer::Token;

use super::state::{ParseError, ParseResult, ParseState, Parser};

type ParserFn<T> = Rc<dyn Fn(&mut ParseState) -> ParseResult<T>>;

/// A type-erased, cheaply clonable parser.
///
/// Grammar rules are written with operators:
/// `a + b` parses both and pairs the results, `a * b` keeps only `b`,
/// `a | b` backtracks into `b` when `a` fails and `p >> f` maps the result.
pub struct BoxedParser<T> {
    parser: ParserFn<T>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T> {
        (self.parser)(state)
    }
}

/// Run `parser`, rewinding the token cursor if it fails.
///
/// The failure itself stays recorded in `state` for error reporting.
fn attempt<T>(parser: &BoxedParser<T>, state: &mut ParseState) -> Option<T> {
    let start = state.position();
    match parser.parse(state) {
        Ok(value) => Some(value),
        Err(_) => {
            state.restore(start);
            None
        }
    }
}

impl<T: 'static> BoxedParser<T> {
    pub fn new<P: Parser<T> + 'static>(parser: P) -> Self {
        BoxedParser {
            parser: Rc::new(move |state| parser.parse(state)),
        }
    }

    pub fn seq<U: 'static>(self, next: BoxedParser<U>) -> BoxedParser<(T, U)> {
        BoxedParser::new(move |state: &mut ParseState| {
            let first = self.parse(state)?;
            Ok((first, next.parse(state)?))
        })
    }

    /// Parse `self`, drop its result and continue with `next`.
    pub fn then<U: 'static>(self, next: BoxedParser<U>) -> BoxedParser<U> {
        BoxedParser::new(move |state: &mut ParseState| {
            self.parse(state)?;
            next.parse(state)
        })
    }

    pub fn map<U: 'static, F: Fn(T) -> U + 'static>(self, f: F) -> BoxedParser<U> {
        BoxedParser::new(move |state: &mut ParseState| self.parse(state).map(&f))
    }

    /// Like `map`, but the conversion may reject the parsed value.
    pub fn try_map<U: 'static, F: Fn(T) -> ParseResult<U> + 'static>(self, f: F) -> BoxedParser<U> {
        BoxedParser::new(move |state: &mut ParseState| {
            let value = self.parse(state)?;
            f(value).inspect_err(|err| state.record_error(err.clone()))
        })
    }

    pub fn or(self, other: BoxedParser<T>) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState| match attempt(&self, state) {
            Some(value) => Ok(value),
            None => other.parse(state),
        })
    }

    /// Report failures of this parser as "expected `name`".
    pub fn label(self, name: &'static str) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState| {
            self.parse(state).map_err(|mut err| {
                err.expected = vec![name.to_string()];
                state.record_error(err.clone());
                err
            })
        })
    }
}

impl<T: 'static, U: 'static> Add<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<(T, U)>;

    fn add(self, rhs: BoxedParser<U>) -> Self::Output {
        self.seq(rhs)
    }
}

impl<T: 'static, U: 'static> Mul<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn mul(self, rhs: BoxedParser<U>) -> Self::Output {
        self.then(rhs)
    }
}

impl<T: 'static> BitOr<BoxedParser<T>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn bitor(self, rhs: BoxedParser<T>) -> Self::Output {
        self.or(rhs)
    }
}

impl<T: 'static, U: 'static, F: Fn(T) -> U + 'static> Shr<F> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}

/// Consume one token matching `predicate`, or fail naming `expected`.
pub fn token_with_error<F: Fn(&Token) -> bool + 'static>(
    predicate: F,
    expected: &'static str,
) -> BoxedParser<Token> {
    BoxedParser::new(move |state: &mut ParseState| {
        let err = match state.peek() {
            Some(tok) if predicate(tok) => {
                if let Some(token) = state.advance() {
                    return Ok(token);
                }
                ParseError::new("unexpected end of input").expected(expected)
            }
            Some(tok) => ParseError::new("unexpected token")
                .expected(expected)
                .found(tok.describe())
                .at(tok.pos()),
            None => ParseError::new("unexpected end of input").expected(expected),
        };
        state.record_error(err.clone());
        Err(err)
    })
}

pub fn expect_const() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::Const(_)), "'const'")
}

pub fn expect_langle() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::LAngle(_)), "'<'")
}

pub fn expect_rangle() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::RAngle(_)), "'>'")
}

pub fn expect_comma() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::Comma(_)), "','")
}

pub fn expect_star() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::Star(_)), "'*'")
}

pub fn expect_ampersand() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::Ampersand(_)), "'&'")
}

pub fn expect_lbracket() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::LBracket(_)), "'['")
}

pub fn expect_rbracket() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::RBracket(_)), "']'")
}

/// Zero or more repetitions of `parser`.
pub fn many<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    BoxedParser::new(move |state: &mut ParseState| {
        Ok(std::iter::from_fn(|| attempt(&parser, state)).collect())
    })
}

pub fn optional<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Option<T>> {
    BoxedParser::new(move |state: &mut ParseState| Ok(attempt(&parser, state)))
}

/// `item (sep item)*`, or nothing at all
pub fn separated<T: 'static, S: 'static>(
    item: BoxedParser<T>,
    separator: BoxedParser<S>,
) -> BoxedParser<Vec<T>> {
    optional(item.clone() + many(separator * item)).map(|items| match items {
        Some((first, rest)) => std::iter::once(first).chain(rest).collect(),
        None => vec![],
    })
}
