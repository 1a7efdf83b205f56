use crate::error::MetaResult;
use crate::eval::Context;
use crate::func::{apply_list, curry, quote_trait};
use crate::library::builtins;
use crate::term::Term;

/// `concat<Ls...>`: lists are joined three at a time, so nesting grows with the
/// logarithm of the number of lists.
pub fn concat(lists: &[Term], ctx: &mut Context) -> MetaResult<Term> {
    if lists.len() <= 3 {
        let mut items = Vec::new();
        for list in lists {
            items.extend(list.as_list()?.iter().cloned());
        }
        return Ok(Term::list(items));
    }
    let grouped = lists
        .chunks(3)
        .map(|group| concat(group, ctx))
        .collect::<MetaResult<Vec<_>>>()?;
    ctx.nested("concat", |ctx| concat(&grouped, ctx))
}

/// `join<ListOfLists>`: concatenate every list in a list.
pub fn join(lists: &Term, ctx: &mut Context) -> MetaResult<Term> {
    concat(lists.as_list()?.as_slice(), ctx)
}

/// `repeat_n<N, T>`: a list of `count` copies of `term`, built by halving.
pub fn repeat_n(count: usize, term: &Term, ctx: &mut Context) -> MetaResult<Term> {
    ctx.check_length("repeat_n", count as u128)?;
    if count <= 1 {
        return Ok(Term::list(std::iter::repeat_n(term.clone(), count)));
    }
    let half = ctx.nested("repeat_n", |ctx| repeat_n(count / 2, term, ctx))?;
    let remainder = Term::list(std::iter::repeat_n(term.clone(), count % 2));
    concat(&[half.clone(), half, remainder], ctx)
}

/// `as_list<Seq>`: the elements of any sequence-like term as a list.
pub fn as_list(sequence: &Term, ctx: &mut Context) -> MetaResult<Term> {
    apply_list(&curry(quote_trait(builtins::id())), sequence, ctx)
}
