//! A small vocabulary of standard type traits, enough to write realistic predicates and
//! transformations for the algorithms.
//!
//! Layout queries assume an LP64 target. Library constructs that are empty classes
//! (constants, lists, metafunction classes, placeholders) have size and alignment 1.
//! Opaque declared classes and `void` have no size.

use crate::error::{MetaError, MetaResult};
use crate::eval::Template;
use crate::library::builtins;
use crate::term::{Constant, Prim, Term};

pub fn is_same(a: &Term, b: &Term) -> Term {
    Term::bool(a == b)
}

fn is_prim(term: &Term, pred: impl Fn(Prim) -> bool) -> Term {
    Term::bool(matches!(term, Term::Prim(prim) if pred(*prim)))
}

pub fn is_integral(term: &Term) -> Term {
    is_prim(term, Prim::is_integral)
}

pub fn is_floating_point(term: &Term) -> Term {
    is_prim(term, Prim::is_floating_point)
}

pub fn is_void(term: &Term) -> Term {
    is_prim(term, |prim| prim == Prim::Void)
}

pub fn is_const(term: &Term) -> Term {
    Term::bool(matches!(term, Term::ConstQualified(_)))
}

pub fn is_pointer(term: &Term) -> Term {
    Term::bool(matches!(term, Term::Pointer(_)))
}

/// Identity conversions and conversions between arithmetic types.
pub fn is_convertible(from: &Term, to: &Term) -> Term {
    let arithmetic = |term: &Term| matches!(term, Term::Prim(prim) if prim.is_arithmetic());
    Term::bool(from == to || (arithmetic(from) && arithmetic(to)))
}

/// `T const`. References and already-const types are unchanged.
pub fn add_const(term: &Term) -> Term {
    match term {
        Term::Reference(_) | Term::ConstQualified(_) => term.clone(),
        _ => Term::const_qualified(term.clone()),
    }
}

/// `T*`, or a pointer to the referred type for a reference.
pub fn add_pointer(term: &Term) -> Term {
    match term {
        Term::Reference(inner) => Term::pointer((**inner).clone()),
        _ => Term::pointer(term.clone()),
    }
}

/// `T&`. `void` and references are unchanged.
pub fn add_lvalue_reference(term: &Term) -> Term {
    match term {
        Term::Prim(Prim::Void) | Term::Reference(_) => term.clone(),
        _ => Term::reference(term.clone()),
    }
}

pub fn remove_const(term: &Term) -> Term {
    match term {
        Term::ConstQualified(inner) => (**inner).clone(),
        _ => term.clone(),
    }
}

pub fn remove_pointer(term: &Term) -> Term {
    match term {
        Term::Pointer(inner) => (**inner).clone(),
        _ => term.clone(),
    }
}

pub fn make_signed(term: &Term) -> MetaResult<Term> {
    let signed = match term {
        Term::Prim(prim) => prim.make_signed(),
        _ => None,
    };
    signed
        .map(Term::Prim)
        .ok_or_else(|| MetaError::not_applicable(format!("{term} has no signed counterpart")))
}

/// Size and alignment in bytes.
fn layout(term: &Term) -> MetaResult<(u64, u64)> {
    let incomplete = || MetaError::not_applicable(format!("{term} is an incomplete type"));
    match term {
        Term::Prim(prim) => Ok((
            prim.size().ok_or_else(incomplete)?,
            prim.align().ok_or_else(incomplete)?,
        )),
        Term::Pointer(_) => Ok((8, 8)),
        Term::Reference(inner) | Term::ConstQualified(inner) => layout(inner),
        Term::Array(inner, extent) => {
            let (size, align) = layout(inner)?;
            Ok((size * extent, align))
        }
        Term::App(app) if app.template.is("std::pair") || app.template.is("std::tuple") => {
            record_layout(&app.args)
        }
        Term::Const(_)
        | Term::List(_)
        | Term::IntSeq(_)
        | Term::Nil
        | Term::Defer(_)
        | Term::Func(_)
        | Term::Placeholder(_) => Ok((1, 1)),
        Term::Named(_) | Term::App(_) => Err(incomplete()),
    }
}

/// Members laid out in order, each at its alignment, the whole padded to the largest.
fn record_layout(members: &[Term]) -> MetaResult<(u64, u64)> {
    if members.is_empty() {
        return Ok((1, 1));
    }
    let mut offset: u64 = 0;
    let mut record_align = 1;
    for member in members {
        let (size, align) = layout(member)?;
        offset = offset.next_multiple_of(align) + size;
        record_align = record_align.max(align);
    }
    Ok((offset.next_multiple_of(record_align), record_align))
}

/// `sizeof_<T>`: a `size_t` constant.
pub fn sizeof_(term: &Term) -> MetaResult<Term> {
    Ok(Term::Const(Constant::size(layout(term)?.0)))
}

/// `alignof_<T>`: a `size_t` constant.
pub fn alignof_(term: &Term) -> MetaResult<Term> {
    Ok(Term::Const(Constant::size(layout(term)?.1)))
}

/// `void_<Ts...>`: always `void`.
pub fn void_(_: &[Term]) -> Term {
    Term::Prim(Prim::Void)
}

/// `inherit<L>`: a class deriving from every element of `L`.
///
/// Every element must be a class type and appear once.
pub fn inherit(list: &Term) -> MetaResult<Term> {
    let bases = list.as_list()?;
    for (index, base) in bases.iter().enumerate() {
        if !is_class(base) {
            return Err(MetaError::not_applicable(format!(
                "cannot inherit from non-class type {base}"
            )));
        }
        if bases.as_slice()[..index].contains(base) {
            return Err(MetaError::not_applicable(format!(
                "{base} appears twice in the base list"
            )));
        }
    }
    Ok(Term::app(builtins::inherit_(), bases.to_vec()))
}

fn is_class(term: &Term) -> bool {
    !matches!(
        term,
        Term::Prim(_)
            | Term::Pointer(_)
            | Term::Reference(_)
            | Term::ConstQualified(_)
            | Term::Array(..)
    )
}

/// `is<T, C>`: whether `T` is an instantiation of the class template `C`.
pub fn is(term: &Term, template: &Template) -> Term {
    Term::bool(matches!(term, Term::App(app) if app.template == *template))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int() -> Term {
        Term::Prim(Prim::Int)
    }

    #[test]
    fn test_predicates() {
        assert_eq!(is_integral(&int()), Term::bool(true));
        assert_eq!(is_integral(&Term::Prim(Prim::Float)), Term::bool(false));
        assert_eq!(is_floating_point(&Term::Prim(Prim::Double)), Term::bool(true));
        assert_eq!(is_void(&Term::Prim(Prim::Void)), Term::bool(true));
        assert_eq!(is_const(&add_const(&int())), Term::bool(true));
        assert_eq!(is_pointer(&add_pointer(&int())), Term::bool(true));
        assert_eq!(
            is_convertible(&int(), &Term::Prim(Prim::Double)),
            Term::bool(true)
        );
        assert_eq!(
            is_convertible(&int(), &Term::pointer(int())),
            Term::bool(false)
        );
    }

    #[test]
    fn test_transformations() {
        let int_ref = add_lvalue_reference(&int());
        assert_eq!(int_ref.to_string(), "int&");
        assert_eq!(add_const(&int_ref), int_ref);
        assert_eq!(add_pointer(&int_ref), Term::pointer(int()));
        assert_eq!(remove_const(&add_const(&int())), int());
        assert_eq!(remove_pointer(&Term::pointer(int())), int());
        assert_eq!(
            make_signed(&Term::Prim(Prim::Unsigned)),
            Ok(Term::Prim(Prim::Int))
        );
        assert!(make_signed(&Term::Prim(Prim::Float)).is_err());
    }

    #[test]
    fn test_sizes() {
        assert_eq!(sizeof_(&int()), Ok(Term::size(4)));
        assert_eq!(sizeof_(&Term::array(Term::Prim(Prim::Char), 5)), Ok(Term::size(5)));
        assert_eq!(alignof_(&Term::array(int(), 3)), Ok(Term::size(4)));
        assert_eq!(sizeof_(&Term::pointer(Term::Prim(Prim::Void))), Ok(Term::size(8)));
        assert_eq!(sizeof_(&Term::empty_list()), Ok(Term::size(1)));
        assert!(sizeof_(&Term::Prim(Prim::Void)).is_err());
        assert!(sizeof_(&Term::named("incomplete")).is_err());
    }

    #[test]
    fn test_pair_layout() {
        let pair = Term::app(
            builtins::std_pair(),
            vec![Term::Prim(Prim::Char), Term::Prim(Prim::Double)],
        );
        assert_eq!(sizeof_(&pair), Ok(Term::size(16)));
        assert_eq!(alignof_(&pair), Ok(Term::size(8)));
    }

    #[test]
    fn test_inherit_requires_unique_classes() {
        let a = Term::named("A");
        let b = Term::named("B");
        let ok = inherit(&Term::list([a.clone(), b.clone()])).unwrap();
        assert_eq!(ok.to_string(), "inherit_<A, B>");
        assert!(inherit(&Term::list([a.clone(), a])).is_err());
        assert!(inherit(&Term::list([b, int()])).is_err());
    }

    #[test]
    fn test_is_instantiation_of() {
        let pair = Term::app(builtins::std_pair(), vec![int(), int()]);
        assert_eq!(is(&pair, &builtins::std_pair()), Term::bool(true));
        assert_eq!(is(&pair, &builtins::std_tuple()), Term::bool(false));
        assert_eq!(is(&int(), &builtins::std_pair()), Term::bool(false));
    }
}
