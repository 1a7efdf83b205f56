use std::fmt;

use lachs::Span;

use crate::config::DEFAULT_MAX_NESTING;
use crate::lexer::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub expected: Vec<String>,
    pub found: Option<String>,
    pub position: Option<Span>,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            expected: vec![],
            found: None,
            position: None,
        }
    }

    pub fn expected(mut self, what: impl Into<String>) -> Self {
        self.expected.push(what.into());
        self
    }

    pub fn found(mut self, what: impl Into<String>) -> Self {
        self.found = Some(what.into());
        self
    }

    pub fn at(mut self, position: Span) -> Self {
        self.position = Some(position);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut msg = self.message.clone();
        if !self.expected.is_empty() {
            msg.push_str(&format!(", expected {}", self.expected.join(" or ")));
        }
        if let Some(found) = &self.found {
            msg.push_str(&format!(", found {found}"));
        }
        match &self.position {
            Some(span) if !span.source.is_empty() => write!(f, "{}", span.to_string(&msg)),
            _ => f.write_str(&msg),
        }
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

pub struct ParseState {
    tokens: Vec<Token>,
    index: usize,
    furthest: Option<(usize, ParseError)>,
    nesting: usize,
    max_nesting: usize,
    fatal: Option<ParseError>,
}

impl ParseState {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            index: 0,
            furthest: None,
            nesting: 0,
            max_nesting: DEFAULT_MAX_NESTING,
            fatal: None,
        }
    }

    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }

    /// Enter one level of nesting. Past the limit parsing stops for good: every later
    /// attempt fails with the same error.
    pub fn descend(&mut self) -> ParseResult<()> {
        if let Some(err) = &self.fatal {
            return Err(err.clone());
        }
        if self.nesting >= self.max_nesting {
            let err = self.error_here(&format!(
                "nesting too deep, the limit is {}",
                self.max_nesting
            ));
            self.fatal = Some(err.clone());
            return Err(err);
        }
        self.nesting += 1;
        Ok(())
    }

    pub fn ascend(&mut self) {
        self.nesting = self.nesting.saturating_sub(1);
    }

    pub fn fatal_error(&self) -> Option<&ParseError> {
        self.fatal.as_ref()
    }

    pub fn advance(&mut self) -> Option<Token> {
        if self.has_next() {
            let token = self.tokens[self.index].clone();
            self.index += 1;
            Some(token)
        } else {
            None
        }
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    pub fn has_next(&self) -> bool {
        self.index < self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn restore(&mut self, position: usize) {
        self.index = position;
    }

    /// Remember `err` if no failure so far got further into the input.
    pub fn record_error(&mut self, err: ParseError) {
        match &self.furthest {
            Some((index, _)) if *index > self.index => {}
            _ => self.furthest = Some((self.index, err)),
        }
    }

    pub fn get_furthest_error(&self) -> Option<&ParseError> {
        self.furthest.as_ref().map(|(_, err)| err)
    }

    /// The furthest recorded failure, if it lies beyond `position`.
    pub fn error_beyond(&self, position: usize) -> Option<&ParseError> {
        match &self.furthest {
            Some((index, err)) if *index > position => Some(err),
            _ => None,
        }
    }

    /// An error pointing at the current token.
    pub fn error_here(&self, msg: &str) -> ParseError {
        match self.peek() {
            Some(tok) => ParseError::new(msg).found(tok.describe()).at(tok.pos()),
            None => ParseError::new(msg).found("end of input"),
        }
    }
}

pub trait Parser<T>: Sized {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T>;
}

impl<T, F: Fn(&mut ParseState) -> ParseResult<T>> Parser<T> for F {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T> {
        self(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nesting_limit_is_sticky() {
        let mut state = ParseState::new(vec![]).with_max_nesting(2);
        assert!(state.descend().is_ok());
        assert!(state.descend().is_ok());
        let err = state.descend().unwrap_err();
        assert_eq!(err.message, "nesting too deep, the limit is 2");

        state.ascend();
        assert_eq!(state.descend().unwrap_err(), err);
        assert_eq!(state.fatal_error(), Some(&err));
    }
}
