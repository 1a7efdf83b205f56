use crate::error::MetaResult;
use crate::eval::{Context, truthy};
use crate::func::invoke;
use crate::term::Term;

/// Split into the elements that satisfy `pred` and those that do not, keeping order.
fn split(
    items: &[Term],
    pred: impl Fn(&Term, &mut Context) -> MetaResult<bool>,
    ctx: &mut Context,
) -> MetaResult<(Vec<Term>, Vec<Term>)> {
    let mut yes = Vec::new();
    let mut no = Vec::new();
    for item in items {
        if pred(item, ctx)? {
            yes.push(item.clone());
        } else {
            no.push(item.clone());
        }
    }
    Ok((yes, no))
}

/// `sort<L, Cmp>`: stable sort by a strict ordering `Cmp(a, b)`.
///
/// A top-down merge sort: each half is sorted one level deeper, so nesting grows with
/// the logarithm of the length. On ties the left half goes first.
pub fn sort(list: &Term, cmp: &Term, ctx: &mut Context) -> MetaResult<Term> {
    let items = list.as_list()?;
    Ok(Term::list(sort_items(items.as_slice(), cmp, ctx)?))
}

fn sort_items(items: &[Term], cmp: &Term, ctx: &mut Context) -> MetaResult<Vec<Term>> {
    if items.len() < 2 {
        return Ok(items.to_vec());
    }
    let (left, right) = items.split_at(items.len() / 2);
    let (left, right) = ctx.nested("sort", |ctx| {
        Ok((sort_items(left, cmp, ctx)?, sort_items(right, cmp, ctx)?))
    })?;
    merge(left, right, cmp, ctx)
}

/// Merge two sorted runs; an element of `right` only overtakes one of `left` when it
/// is strictly ordered before it.
fn merge(left: Vec<Term>, right: Vec<Term>, cmp: &Term, ctx: &mut Context) -> MetaResult<Vec<Term>> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let ordered = invoke(cmp, &[r.clone(), l.clone()], ctx)?;
        if truthy(&ordered, ctx)? {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }
    merged.extend(left);
    merged.extend(right);
    Ok(merged)
}

/// `partition<L, Pred>`: `list<list<satisfying...>, list<others...>>`.
pub fn partition(list: &Term, pred: &Term, ctx: &mut Context) -> MetaResult<Term> {
    let satisfies = |item: &Term, ctx: &mut Context| {
        let result = invoke(pred, std::slice::from_ref(item), ctx)?;
        truthy(&result, ctx)
    };
    let (yes, no) = split(list.as_list()?.as_slice(), satisfies, ctx)?;
    Ok(Term::list([Term::list(yes), Term::list(no)]))
}
