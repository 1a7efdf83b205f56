//! Syntax tree of the textual term notation, before names are looked up.

use lachs::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Name(Name),
    Literal(Literal),
    Modified(Modified),
}

impl Expr {
    pub fn position(&self) -> Span {
        match self {
            Expr::Name(name) => name.position.clone(),
            Expr::Literal(literal) => literal.position.clone(),
            Expr::Modified(modified) => modified.position.clone(),
        }
    }

    /// The bare name this expression consists of, if it has no arguments.
    pub fn as_bare_name(&self) -> Option<&str> {
        match self {
            Expr::Name(Name {
                path, args: None, ..
            }) => Some(path),
            _ => None,
        }
    }
}

/// `path` or `path<args...>`; `list<>` has `Some(vec![])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    pub path: String,
    pub args: Option<Vec<Expr>>,
    pub position: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralValue {
    Integer(i128),
    Char(u8),
    Bool(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub value: LiteralValue,
    pub position: Span,
}

/// Declarator suffixes and the `const` qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Pointer,
    Reference,
    Const,
    Array(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modified {
    pub inner: Box<Expr>,
    pub modifier: Modifier,
    pub position: Span,
}
