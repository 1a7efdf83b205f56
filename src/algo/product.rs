use crate::error::{MetaError, MetaResult};
use crate::eval::{Arity, Context};
use crate::func::{bind_back, native, quote};
use crate::library::builtins;
use crate::term::Term;

use super::access::{front, size};
use super::build::repeat_n;
use super::fold::{fold, reverse_fold};
use super::transform::transform;

/// `cartesian_product<ListOfLists>`: every combination taking one element from each
/// list, with the last list varying fastest.
///
/// A right fold from `list<list<>>`: each step prepends every element of the current
/// list to every combination built so far.
pub fn cartesian_product(lists: &Term, ctx: &mut Context) -> MetaResult<Term> {
    let step = native("cartesian_product_step", Arity::exactly(2), |args, ctx| match args {
        [combinations, list] => {
            let combinations = combinations.as_list()?;
            let list = list.as_list()?;
            let count = (combinations.len() as u128).saturating_mul(list.len() as u128);
            ctx.check_length("cartesian_product", count)?;
            let mut result = Vec::with_capacity(count as usize);
            for head in list {
                for tail in combinations {
                    let tail = tail.as_list()?;
                    result.push(Term::list(std::iter::once(head).chain(tail).cloned()));
                }
            }
            Ok(Term::list(result))
        }
        _ => Err(MetaError::not_applicable("cartesian product step takes 2 arguments")),
    });
    reverse_fold(lists, Term::list([Term::empty_list()]), &step, ctx)
}

/// `zip_with<F, ListOfLists>`: `list<F(L0_0, L1_0, ...), F(L0_1, L1_1, ...), ...>`.
///
/// Starts from one copy of `F` per position, binds each list's elements in turn with
/// `transform<_, L, quote<bind_front>>`, then invokes every bound function. The lists
/// must have equal length.
pub fn zip_with(func: &Term, lists: &Term, ctx: &mut Context) -> MetaResult<Term> {
    let width = size(&front(lists)?)?;
    let seeds = repeat_n(width, func, ctx)?;
    let bind_each = bind_back(
        quote(builtins::transform()),
        vec![quote(builtins::bind_front())],
    );
    let bound = fold(lists, seeds, &bind_each, ctx)?;
    transform(&bound, &quote(builtins::invoke()), ctx)
}

/// `zip<ListOfLists>`: `zip_with<quote<list>, ListOfLists>`.
pub fn zip(lists: &Term, ctx: &mut Context) -> MetaResult<Term> {
    zip_with(&quote(builtins::list()), lists, ctx)
}

/// `transpose<ListOfLists>`: rows become columns.
pub fn transpose(lists: &Term, ctx: &mut Context) -> MetaResult<Term> {
    let width = size(&front(lists)?)?;
    let columns = repeat_n(width, &Term::empty_list(), ctx)?;
    let append_row = bind_back(
        quote(builtins::transform()),
        vec![quote(builtins::push_back())],
    );
    fold(lists, columns, &append_row, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lambda::{Placeholder, lambda};
    use crate::lazy;
    use crate::term::Prim;

    fn ints(values: &[i32]) -> Term {
        Term::list(values.iter().map(|v| Term::int(*v)))
    }

    #[test]
    fn test_cartesian_product() {
        let mut ctx = Context::new();
        let lists = Term::list([ints(&[0, 1]), ints(&[2, 3])]);
        let expected = Term::list([
            ints(&[0, 2]),
            ints(&[0, 3]),
            ints(&[1, 2]),
            ints(&[1, 3]),
        ]);
        assert_eq!(cartesian_product(&lists, &mut ctx), Ok(expected));
        assert_eq!(
            cartesian_product(&Term::empty_list(), &mut ctx),
            Ok(Term::list([Term::empty_list()]))
        );
        let with_empty = Term::list([ints(&[0, 1]), Term::empty_list()]);
        assert_eq!(cartesian_product(&with_empty, &mut ctx), Ok(Term::empty_list()));
    }

    #[test]
    fn test_zip() {
        let mut ctx = Context::new();
        let lists = Term::list([
            Term::list([Term::Prim(Prim::Int), Term::Prim(Prim::Short)]),
            Term::list([Term::Prim(Prim::Float), Term::Prim(Prim::Double)]),
        ]);
        let zipped = zip(&lists, &mut ctx).unwrap();
        assert_eq!(zipped.to_string(), "list<list<int, float>, list<short, double>>");
        assert_eq!(transpose(&lists, &mut ctx), Ok(zipped));
    }

    #[test]
    fn test_zip_with_lambda() {
        let mut ctx = Context::new();
        let lists = Term::list([ints(&[1, 2, 3]), ints(&[10, 20, 30]), ints(&[100, 200, 300])]);
        let (a, b, c) = (Placeholder::A, Placeholder::B, Placeholder::C);
        let sum3 = lambda(
            vec![a, b, c],
            lazy::plus(vec![a.into(), lazy::plus(vec![b.into(), c.into()])]),
        )
        .unwrap();
        assert_eq!(
            zip_with(&sum3, &lists, &mut ctx),
            Ok(ints(&[111, 222, 333]))
        );
    }

    #[test]
    fn test_zip_mismatched_lengths() {
        let mut ctx = Context::new();
        let lists = Term::list([ints(&[1, 2]), ints(&[1])]);
        let err = zip(&lists, &mut ctx).unwrap_err();
        assert!(err.is_soft());
        assert!(zip(&Term::empty_list(), &mut ctx).is_err());
    }
}
