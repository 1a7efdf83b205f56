use crate::error::{MetaError, MetaResult};
use crate::eval::{Arity, Context, truthy};
use crate::func::{bind_front, invoke, native, quote};
use crate::library::builtins;
use crate::term::Term;

use super::access::push_back;
use super::fold::{fold, reverse_fold};
use super::search::in_;

/// `transform<L, F>`: `list<F(L0), F(L1), ...>`.
pub fn transform(list: &Term, func: &Term, ctx: &mut Context) -> MetaResult<Term> {
    let items = list
        .as_list()?
        .iter()
        .map(|item| invoke(func, std::slice::from_ref(item), ctx))
        .collect::<MetaResult<Vec<_>>>()?;
    Ok(Term::list(items))
}

/// `transform<L1, L2, F>`: `list<F(L1_0, L2_0), ...>`. The lists must have equal length.
pub fn transform2(lhs: &Term, rhs: &Term, func: &Term, ctx: &mut Context) -> MetaResult<Term> {
    let (lhs, rhs) = (lhs.as_list()?, rhs.as_list()?);
    if lhs.len() != rhs.len() {
        return Err(MetaError::not_applicable(format!(
            "transform over lists of sizes {} and {}",
            lhs.len(),
            rhs.len()
        )));
    }
    let items = lhs
        .iter()
        .zip(rhs)
        .map(|(a, b)| invoke(func, &[a.clone(), b.clone()], ctx))
        .collect::<MetaResult<Vec<_>>>()?;
    Ok(Term::list(items))
}

/// `filter<L, Pred>`: a fold whose step appends the element only when it satisfies
/// the predicate.
pub fn filter(list: &Term, pred: &Term, ctx: &mut Context) -> MetaResult<Term> {
    let step = native("filter_step", Arity::exactly(3), |args, ctx| match args {
        [pred, acc, item] => {
            let keep = invoke(pred, std::slice::from_ref(item), ctx)?;
            if truthy(&keep, ctx)? {
                push_back(acc, std::slice::from_ref(item))
            } else {
                Ok(acc.clone())
            }
        }
        _ => Err(MetaError::not_applicable("filter step takes 3 arguments")),
    });
    fold(list, Term::empty_list(), &bind_front(step, vec![pred.clone()]), ctx)
}

/// `replace<L, Old, New>`
pub fn replace(list: &Term, old: &Term, new: &Term) -> MetaResult<Term> {
    let items = list.as_list()?;
    Ok(Term::list(items.iter().map(|item| {
        if item == old { new.clone() } else { item.clone() }
    })))
}

/// `replace_if<L, Pred, New>`
pub fn replace_if(list: &Term, pred: &Term, new: &Term, ctx: &mut Context) -> MetaResult<Term> {
    let mut items = Vec::new();
    for item in list.as_list()? {
        let matched = invoke(pred, std::slice::from_ref(item), ctx)?;
        items.push(if truthy(&matched, ctx)? {
            new.clone()
        } else {
            item.clone()
        });
    }
    Ok(Term::list(items))
}

/// `unique<L>`: keeps the first occurrence of each element. Every step searches the
/// accumulated result, so this is quadratic.
pub fn unique(list: &Term, ctx: &mut Context) -> MetaResult<Term> {
    let step = native("unique_step", Arity::exactly(2), |args, _| match args {
        [acc, item] if in_(acc, item)? => Ok(acc.clone()),
        [acc, item] => push_back(acc, std::slice::from_ref(item)),
        _ => Err(MetaError::not_applicable("unique step takes 2 arguments")),
    });
    fold(list, Term::empty_list(), &step, ctx)
}

/// `reverse<L>`: `reverse_fold<L, list<>, quote<push_back>>`.
pub fn reverse(list: &Term, ctx: &mut Context) -> MetaResult<Term> {
    reverse_fold(list, Term::empty_list(), &quote(builtins::push_back()), ctx)
}
