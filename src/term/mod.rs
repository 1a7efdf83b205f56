//! # Terms
//!
//! Every value the toolkit manipulates is a [`Term`]: the interpreter's stand-in for a
//! C++ type. Terms are immutable and cheap to clone (children sit behind `Rc`).
//!
//! ## Term Forms
//!
//! - **Types**: fundamental types ([`Prim`]), opaque declared classes, and the compound
//!   forms `T*`, `T&`, `T const` and `T[N]`
//! - **Constants**: integral constants such as `int_<3>` or `size_t<0>` ([`Constant`])
//! - **Sequences**: the library's [`List`] and integer sequences ([`IntSeq`])
//! - **Instantiations**: a class template applied to arguments, such as
//!   `std::pair<int, short>`
//! - **Deferred nodes**: a template and its arguments, not yet instantiated
//! - **Metafunction classes**: invocable values ([`crate::func::Func`])
//! - **Placeholders**: `_a` to `_i` and the variadic `_args` family
//! - **`nil_`**: the empty sentinel
//!
//! Structural equality (`==`) is type identity. Two terms printed the same way are
//! equal.

mod constant;
mod intseq;
mod list;
mod prim;

use std::rc::Rc;

pub use constant::Constant;
pub use intseq::IntSeq;
pub use list::List;
pub use prim::Prim;

use crate::error::{MetaError, MetaResult};
use crate::eval::Template;
use crate::func::Func;
use crate::lambda::Placeholder;

/// A template applied to arguments: the payload of both instantiations and
/// deferred nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub template: Template,
    pub args: Vec<Term>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Prim(Prim),
    /// An opaque, user-declared class type.
    Named(Rc<str>),
    Pointer(Rc<Term>),
    Reference(Rc<Term>),
    ConstQualified(Rc<Term>),
    Array(Rc<Term>, u64),
    Const(Constant),
    List(List),
    IntSeq(IntSeq),
    Nil,
    /// A class template instantiation such as `std::pair<int, short>`.
    App(Rc<Application>),
    /// `defer<C, Ts...>`: instantiating `C<Ts...>` is postponed until forced.
    Defer(Rc<Application>),
    Func(Func),
    Placeholder(Placeholder),
}

impl Term {
    pub fn int(value: i32) -> Term {
        Term::Const(Constant::int(value))
    }

    pub fn size(value: u64) -> Term {
        Term::Const(Constant::size(value))
    }

    pub fn bool(value: bool) -> Term {
        Term::Const(Constant::bool(value))
    }

    pub fn char(value: u8) -> Term {
        Term::Const(Constant::char(value))
    }

    pub fn npos() -> Term {
        Term::Const(Constant::npos())
    }

    pub fn named(name: &str) -> Term {
        Term::Named(name.into())
    }

    pub fn list(items: impl IntoIterator<Item = Term>) -> Term {
        Term::List(items.into_iter().collect())
    }

    pub fn empty_list() -> Term {
        Term::List(List::empty())
    }

    pub fn pointer(inner: Term) -> Term {
        Term::Pointer(Rc::new(inner))
    }

    pub fn reference(inner: Term) -> Term {
        Term::Reference(Rc::new(inner))
    }

    pub fn const_qualified(inner: Term) -> Term {
        Term::ConstQualified(Rc::new(inner))
    }

    pub fn array(inner: Term, extent: u64) -> Term {
        Term::Array(Rc::new(inner), extent)
    }

    pub fn app(template: Template, args: Vec<Term>) -> Term {
        Term::App(Rc::new(Application { template, args }))
    }

    pub fn defer(template: Template, args: Vec<Term>) -> Term {
        Term::Defer(Rc::new(Application { template, args }))
    }

    pub fn as_list(&self) -> MetaResult<&List> {
        match self {
            Term::List(list) => Ok(list),
            other => Err(MetaError::not_applicable(format!(
                "expected a list, found {other}"
            ))),
        }
    }

    pub fn as_const(&self) -> Option<&Constant> {
        match self {
            Term::Const(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_func(&self) -> Option<&Func> {
        match self {
            Term::Func(func) => Some(func),
            _ => None,
        }
    }

    pub fn as_placeholder(&self) -> Option<Placeholder> {
        match self {
            Term::Placeholder(p) => Some(*p),
            _ => None,
        }
    }

    /// The type named by a type-valued argument, such as the `T` of `integer_sequence<T, ...>`.
    pub fn as_prim(&self) -> MetaResult<Prim> {
        match self {
            Term::Prim(prim) => Ok(*prim),
            other => Err(MetaError::not_applicable(format!(
                "expected a fundamental type, found {other}"
            ))),
        }
    }
}

impl From<Prim> for Term {
    fn from(prim: Prim) -> Self {
        Term::Prim(prim)
    }
}

impl From<Constant> for Term {
    fn from(c: Constant) -> Self {
        Term::Const(c)
    }
}

impl From<List> for Term {
    fn from(list: List) -> Self {
        Term::List(list)
    }
}

impl From<Placeholder> for Term {
    fn from(p: Placeholder) -> Self {
        Term::Placeholder(p)
    }
}

impl From<Func> for Term {
    fn from(func: Func) -> Self {
        Term::Func(func)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_list_rejects_non_lists() {
        assert!(Term::empty_list().as_list().is_ok());
        let err = Term::Prim(Prim::Int).as_list().unwrap_err();
        assert!(err.is_soft());
        assert_eq!(err.to_string(), "not applicable: expected a list, found int");
    }

    #[test]
    fn test_identity_is_structural() {
        let a = Term::list([Term::Prim(Prim::Int), Term::array(Prim::Char.into(), 5)]);
        let b = Term::list([Term::Prim(Prim::Int), Term::array(Prim::Char.into(), 5)]);
        assert_eq!(a, b);
        assert_ne!(Term::int(1), Term::size(1));
    }
}
