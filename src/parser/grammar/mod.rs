//! Grammar of the term notation
//!
//! - `literal`: identifiers, integers, characters, booleans
//! - `term`: instantiations, declarator suffixes and `const`

mod literal;
mod term;

use crate::ast::Expr;

use super::state::{ParseResult, ParseState, Parser};

pub use term::term;

/// Parse exactly one term from the token stream.
///
/// On failure, reports the error that got furthest into the input. A
/// term followed by more tokens fails the same way, so `list<int int>`
/// reports the missing `>` rather than the trailing `<`.
pub fn parse(state: &mut ParseState) -> ParseResult<Expr> {
    let result = term().parse(state);
    if let Some(err) = state.fatal_error() {
        return Err(err.clone());
    }
    match result {
        Ok(_) if state.has_next() => Err(state
            .error_beyond(state.position())
            .cloned()
            .unwrap_or_else(|| state.error_here("unexpected trailing input"))),
        Ok(expr) => Ok(expr),
        Err(err) => Err(state.get_furthest_error().cloned().unwrap_or(err)),
    }
}
