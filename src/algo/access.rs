use crate::error::{MetaError, MetaResult};
use crate::eval::Context;
use crate::term::{List, Term};

fn out_of_range(what: &str, index: usize, list: &List) -> MetaError {
    MetaError::not_applicable(format!(
        "{what} index {index} is out of range for a list of size {}",
        list.len()
    ))
}

pub fn size(list: &Term) -> MetaResult<usize> {
    Ok(list.as_list()?.len())
}

pub fn empty(list: &Term) -> MetaResult<bool> {
    Ok(list.as_list()?.is_empty())
}

pub fn front(list: &Term) -> MetaResult<Term> {
    list.as_list()?
        .first()
        .cloned()
        .ok_or_else(|| MetaError::not_applicable("front of an empty list"))
}

pub fn back(list: &Term) -> MetaResult<Term> {
    list.as_list()?
        .last()
        .cloned()
        .ok_or_else(|| MetaError::not_applicable("back of an empty list"))
}

/// The element at `index`, found by skipping `index` elements in one step.
pub fn at(list: &Term, index: usize) -> MetaResult<Term> {
    let items = list.as_list()?;
    items
        .skip(index)
        .and_then(|rest| rest.first().cloned())
        .ok_or_else(|| out_of_range("at", index, items))
}

/// The list without its first `count` elements. Shares storage with `list`.
pub fn drop(list: &Term, count: usize) -> MetaResult<Term> {
    let items = list.as_list()?;
    items
        .skip(count)
        .map(Term::List)
        .ok_or_else(|| out_of_range("drop", count, items))
}

pub fn push_front(list: &Term, items: &[Term]) -> MetaResult<Term> {
    let list = list.as_list()?;
    Ok(Term::list(items.iter().chain(list).cloned()))
}

pub fn push_back(list: &Term, items: &[Term]) -> MetaResult<Term> {
    let list = list.as_list()?;
    Ok(Term::list(list.iter().chain(items).cloned()))
}

pub fn pop_front(list: &Term) -> MetaResult<Term> {
    let items = list.as_list()?;
    if items.is_empty() {
        return Err(MetaError::not_applicable("pop_front of an empty list"));
    }
    drop(list, 1)
}

/// `pair<F, S>`: a two-element list.
pub fn pair(first: Term, second: Term) -> Term {
    Term::list([first, second])
}

/// The first element of any sequence-like term, such as `std::pair<int, short>`.
pub fn first(pair: &Term, ctx: &Context) -> MetaResult<Term> {
    element(pair, 0, ctx)
}

pub fn second(pair: &Term, ctx: &Context) -> MetaResult<Term> {
    element(pair, 1, ctx)
}

fn element(pair: &Term, index: usize, ctx: &Context) -> MetaResult<Term> {
    ctx.unpack(pair)?
        .into_iter()
        .nth(index)
        .ok_or_else(|| MetaError::not_applicable(format!("{pair} has no element {index}")))
}
