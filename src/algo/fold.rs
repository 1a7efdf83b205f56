use crate::error::MetaResult;
use crate::eval::Context;
use crate::func::invoke;
use crate::term::Term;

/// `fold<L, State, Op>`: `Op(...Op(Op(State, L0), L1)..., Ln)`.
///
/// A step that is not invocable aborts the whole fold with that failure.
pub fn fold(list: &Term, state: Term, op: &Term, ctx: &mut Context) -> MetaResult<Term> {
    let mut state = state;
    for item in list.as_list()? {
        state = invoke(op, &[state, item.clone()], ctx)?;
    }
    Ok(state)
}

/// `accumulate<L, State, Op>`: another name for [`fold`].
pub fn accumulate(list: &Term, state: Term, op: &Term, ctx: &mut Context) -> MetaResult<Term> {
    fold(list, state, op, ctx)
}

/// `reverse_fold<L, State, Op>`: `Op(reverse_fold<tail, State, Op>, head)`, so the last
/// element is combined first.
pub fn reverse_fold(list: &Term, state: Term, op: &Term, ctx: &mut Context) -> MetaResult<Term> {
    let mut state = state;
    for item in list.as_list()?.iter().rev() {
        state = invoke(op, &[state, item.clone()], ctx)?;
    }
    Ok(state)
}
