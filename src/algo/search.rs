use crate::error::MetaResult;
use crate::eval::{Context, truthy};
use crate::func::{invoke, not_fn};
use crate::term::{List, Term};

fn satisfies(pred: &Term, item: &Term, ctx: &mut Context) -> MetaResult<bool> {
    let result = invoke(pred, std::slice::from_ref(item), ctx)?;
    truthy(&result, ctx)
}

fn first_match(list: &List, pred: &Term, ctx: &mut Context) -> MetaResult<Option<usize>> {
    for (index, item) in list.iter().enumerate() {
        if satisfies(pred, item, ctx)? {
            return Ok(Some(index));
        }
    }
    Ok(None)
}

/// Scans forward, remembering the last match.
fn last_match(list: &List, pred: &Term, ctx: &mut Context) -> MetaResult<Option<usize>> {
    let mut found = None;
    for (index, item) in list.iter().enumerate() {
        if satisfies(pred, item, ctx)? {
            found = Some(index);
        }
    }
    Ok(found)
}

fn suffix(list: &List, start: Option<usize>) -> Term {
    match start.and_then(|index| list.skip(index)) {
        Some(rest) => Term::List(rest),
        None => Term::empty_list(),
    }
}

/// `find<L, T>`: the suffix of `L` starting at the first `T`, or the empty list.
pub fn find(list: &Term, term: &Term) -> MetaResult<Term> {
    let list = list.as_list()?;
    Ok(suffix(list, list.iter().position(|item| item == term)))
}

/// `reverse_find<L, T>`: the suffix of `L` starting at the last `T`, or the empty list.
pub fn reverse_find(list: &Term, term: &Term) -> MetaResult<Term> {
    let list = list.as_list()?;
    Ok(suffix(list, list.iter().rposition(|item| item == term)))
}

pub fn find_if(list: &Term, pred: &Term, ctx: &mut Context) -> MetaResult<Term> {
    let list = list.as_list()?;
    let start = first_match(list, pred, ctx)?;
    Ok(suffix(list, start))
}

pub fn reverse_find_if(list: &Term, pred: &Term, ctx: &mut Context) -> MetaResult<Term> {
    let list = list.as_list()?;
    let start = last_match(list, pred, ctx)?;
    Ok(suffix(list, start))
}

/// `find_index<L, T>`; `None` is reported as `npos` by the template.
pub fn find_index(list: &Term, term: &Term) -> MetaResult<Option<usize>> {
    Ok(list.as_list()?.iter().position(|item| item == term))
}

pub fn reverse_find_index(list: &Term, term: &Term) -> MetaResult<Option<usize>> {
    Ok(list.as_list()?.iter().rposition(|item| item == term))
}

/// `in<L, T>`
pub fn in_(list: &Term, term: &Term) -> MetaResult<bool> {
    Ok(find_index(list, term)?.is_some())
}

pub fn count(list: &Term, term: &Term) -> MetaResult<usize> {
    Ok(list.as_list()?.iter().filter(|item| *item == term).count())
}

pub fn count_if(list: &Term, pred: &Term, ctx: &mut Context) -> MetaResult<usize> {
    let mut total = 0;
    for item in list.as_list()? {
        if satisfies(pred, item, ctx)? {
            total += 1;
        }
    }
    Ok(total)
}

/// `all_of<L, F>`: `empty<find_if<L, not_fn<F>>>`.
pub fn all_of(list: &Term, pred: &Term, ctx: &mut Context) -> MetaResult<bool> {
    let counterexample = find_if(list, &not_fn(pred.clone()), ctx)?;
    Ok(counterexample.as_list()?.is_empty())
}

/// `any_of<L, F>`: `not_<empty<find_if<L, F>>>`.
pub fn any_of(list: &Term, pred: &Term, ctx: &mut Context) -> MetaResult<bool> {
    let witness = find_if(list, pred, ctx)?;
    Ok(!witness.as_list()?.is_empty())
}

pub fn none_of(list: &Term, pred: &Term, ctx: &mut Context) -> MetaResult<bool> {
    Ok(!any_of(list, pred, ctx)?)
}
