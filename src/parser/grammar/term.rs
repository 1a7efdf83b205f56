//! Term parsers
//!
//! ```text
//! term     := "const"? atom suffix*
//! atom     := integer | character | boolean | ident ("<" args ">")?
//! args     := (term ("," term)*)?
//! suffix   := "*" | "&" | "const" | "[" integer "]"
//! ```

use lachs::Span;

use crate::ast::{Expr, Modified, Modifier, Name};
use crate::lexer::Token;
use crate::parser::combinators::{
    BoxedParser, expect_ampersand, expect_comma, expect_const, expect_langle, expect_lbracket,
    expect_rangle, expect_rbracket, expect_star, many, optional, separated,
};
use crate::parser::state::{ParseResult, ParseState, Parser};

use super::literal::{boolean, character, extent, ident, integer};

/// term := "const"? atom suffix*
pub fn term() -> BoxedParser<Expr> {
    BoxedParser::new(|state: &mut ParseState| {
        state.descend()?;
        let expr = term_at_depth(state);
        state.ascend();
        expr
    })
}

fn term_at_depth(state: &mut ParseState) -> ParseResult<Expr> {
    let leading_const = optional(expect_const()).parse(state)?;
    let mut expr = atom().parse(state)?;
    if let Some(token) = leading_const {
        let position = token.pos().merge(&expr.position());
        expr = modify(expr, Modifier::Const, position);
    }
    for (modifier, end) in many(suffix()).parse(state)? {
        let position = expr.position().merge(&end);
        expr = modify(expr, modifier, position);
    }
    Ok(expr)
}

fn modify(inner: Expr, modifier: Modifier, position: Span) -> Expr {
    Expr::Modified(Modified {
        inner: Box::new(inner),
        modifier,
        position,
    })
}

/// atom := integer | character | boolean | name
fn atom() -> BoxedParser<Expr> {
    let literal = (integer() | character() | boolean()) >> Expr::Literal;
    (literal | name()).label("term")
}

/// name := ident ("<" args ">")?
fn name() -> BoxedParser<Expr> {
    ident() + optional(arguments())
        >> |((path, start), args): ((String, Span), Option<(Vec<Expr>, Span)>)| {
            let (args, position) = match args {
                Some((args, end)) => (Some(args), start.merge(&end)),
                None => (None, start),
            };
            Expr::Name(Name {
                path,
                args,
                position,
            })
        }
}

/// "<" args ">", with the position of the closing bracket
fn arguments() -> BoxedParser<(Vec<Expr>, Span)> {
    (expect_langle() * separated(term(), expect_comma())) + expect_rangle()
        >> |(args, close): (Vec<Expr>, Token)| (args, close.pos())
}

/// suffix := "*" | "&" | "const" | "[" integer "]"
fn suffix() -> BoxedParser<(Modifier, Span)> {
    let pointer = expect_star() >> |tok: Token| (Modifier::Pointer, tok.pos());
    let reference = expect_ampersand() >> |tok: Token| (Modifier::Reference, tok.pos());
    let constant = expect_const() >> |tok: Token| (Modifier::Const, tok.pos());
    let array = (expect_lbracket() * extent()) + expect_rbracket()
        >> |(n, close): (u64, Token)| (Modifier::Array(n), close.pos());
    pointer | reference | constant | array
}
