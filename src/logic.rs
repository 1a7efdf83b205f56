//! Boolean logic over integral constants.
//!
//! The eager `if_` returns the chosen branch without forcing it. `and_` and `or_`
//! short-circuit: the operands after the first decisive one are never evaluated, so an
//! ill-formed trailing operand is harmless. `strict_and` and `strict_or` evaluate every
//! operand.

use tracing::debug;

use crate::error::{MetaError, MetaResult};
use crate::eval::{Context, truthy};
use crate::term::Term;

/// `if_<Cond, Then>` (enable-if) and `if_<Cond, Then, Else>` (conditional).
pub fn if_(cond: &Term, then: &Term, otherwise: Option<&Term>, ctx: &mut Context) -> MetaResult<Term> {
    if truthy(cond, ctx)? {
        return Ok(then.clone());
    }
    otherwise
        .cloned()
        .ok_or_else(|| MetaError::not_applicable(format!("if_ condition {cond} is false")))
}

/// Template form of `if_` and `if_c`: two or three arguments.
pub fn if_from_args(args: &[Term], ctx: &mut Context) -> MetaResult<Term> {
    match args {
        [cond, then] => if_(cond, then, None, ctx),
        [cond, then, otherwise] => if_(cond, then, Some(otherwise), ctx),
        _ => Err(MetaError::not_applicable(format!(
            "if_ expects 2 to 3 arguments, found {}",
            args.len()
        ))),
    }
}

pub fn and_(operands: &[Term], ctx: &mut Context) -> MetaResult<Term> {
    short_circuit(operands, false, ctx)
}

pub fn or_(operands: &[Term], ctx: &mut Context) -> MetaResult<Term> {
    short_circuit(operands, true, ctx)
}

fn short_circuit(operands: &[Term], decisive: bool, ctx: &mut Context) -> MetaResult<Term> {
    for (index, operand) in operands.iter().enumerate() {
        if truthy(operand, ctx)? == decisive {
            debug!(skipped = operands.len() - index - 1, decisive, "short-circuited");
            return Ok(Term::bool(decisive));
        }
    }
    Ok(Term::bool(!decisive))
}

/// Like `and_`, but every operand is evaluated.
pub fn strict_and(operands: &[Term], ctx: &mut Context) -> MetaResult<Term> {
    let values = evaluate_all(operands, ctx)?;
    Ok(Term::bool(values.into_iter().all(|v| v)))
}

/// Like `or_`, but every operand is evaluated.
pub fn strict_or(operands: &[Term], ctx: &mut Context) -> MetaResult<Term> {
    let values = evaluate_all(operands, ctx)?;
    Ok(Term::bool(values.into_iter().any(|v| v)))
}

fn evaluate_all(operands: &[Term], ctx: &mut Context) -> MetaResult<Vec<bool>> {
    operands.iter().map(|operand| truthy(operand, ctx)).collect()
}

pub fn not_(operand: &Term, ctx: &mut Context) -> MetaResult<Term> {
    Ok(Term::bool(!truthy(operand, ctx)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lazy::defer;
    use crate::library::builtins;
    use crate::term::Prim;

    fn ill_formed() -> Term {
        defer(builtins::std_pair(), vec![Term::Prim(Prim::Int)])
    }

    #[test]
    fn test_if_picks_branch() {
        let mut ctx = Context::new();
        let int = Term::Prim(Prim::Int);
        assert_eq!(
            if_(&Term::bool(false), &ill_formed(), Some(&int), &mut ctx),
            Ok(int.clone())
        );
        assert!(if_(&Term::bool(false), &int, None, &mut ctx).is_err());
        assert_eq!(if_(&Term::int(3), &int, None, &mut ctx), Ok(int));
    }

    #[test]
    fn test_and_short_circuits() {
        let mut ctx = Context::new();
        let operands = [Term::bool(true), Term::bool(false), ill_formed()];
        assert_eq!(and_(&operands, &mut ctx), Ok(Term::bool(false)));
        assert!(strict_and(&operands, &mut ctx).is_err());
        assert_eq!(and_(&[], &mut ctx), Ok(Term::bool(true)));
    }

    #[test]
    fn test_or_short_circuits() {
        let mut ctx = Context::new();
        let operands = [Term::bool(false), Term::bool(true), ill_formed()];
        assert_eq!(or_(&operands, &mut ctx), Ok(Term::bool(true)));
        assert!(strict_or(&operands, &mut ctx).is_err());
        assert_eq!(or_(&[], &mut ctx), Ok(Term::bool(false)));
    }

    #[test]
    fn test_not() {
        let mut ctx = Context::new();
        assert_eq!(not_(&Term::bool(true), &mut ctx), Ok(Term::bool(false)));
        assert!(not_(&Term::Prim(Prim::Int), &mut ctx).is_err());
    }
}
